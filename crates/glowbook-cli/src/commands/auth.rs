use anyhow::Result;
use glowbook_application::AppContext;
use glowbook_core::otp::OtpRegistration;

pub async fn register(context: &AppContext, name: &str, mobile: &str, pin: &str) -> Result<()> {
    let user = context.auth.register(name, mobile, pin).await?;
    println!("✅ Registered and signed in as {} ({})", user.name, user.id);
    Ok(())
}

pub async fn login(context: &AppContext, mobile: &str, pin: &str) -> Result<()> {
    let user = context.auth.sign_in(mobile, pin).await?;
    println!("✅ Signed in as {} ({})", user.name, user.id);
    Ok(())
}

pub async fn request_otp(context: &AppContext, mobile: &str) -> Result<()> {
    let requested = context.auth.request_otp(mobile).await?;
    println!("📨 OTP sent to {}", mobile);
    if let Some(seconds) = requested.expires_in {
        println!("   Expires in {} seconds", seconds);
    }
    Ok(())
}

pub async fn verify_otp(context: &AppContext, mobile: &str, code: &str) -> Result<()> {
    let verification = context.auth.verify_otp(mobile, code).await?;
    if verification.verified {
        println!("✅ Mobile number verified");
        if let Some(token) = verification.otp_token {
            println!("   Verification token: {}", token);
            println!("   Pass it to signup with --otp-token");
        }
    } else {
        let reason = verification
            .message
            .unwrap_or_else(|| "Verification failed".to_string());
        println!("❌ {}", reason);
    }
    Ok(())
}

pub async fn signup(
    context: &AppContext,
    name: &str,
    mobile: &str,
    pin: &str,
    code: &str,
    otp_token: Option<String>,
) -> Result<()> {
    let user = context
        .auth
        .sign_up(OtpRegistration {
            name: name.to_string(),
            mobile_number: mobile.to_string(),
            pin: pin.to_string(),
            code: code.to_string(),
            otp_token,
        })
        .await?;
    println!("✅ Welcome, {}! Your account is ready.", user.name);
    Ok(())
}

pub async fn whoami(context: &AppContext) -> Result<()> {
    match context.api.me().await? {
        Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
        None => println!("Not signed in."),
    }
    Ok(())
}

pub async fn logout(context: &AppContext) -> Result<()> {
    context.auth.sign_out().await?;
    println!("👋 Signed out.");
    Ok(())
}
