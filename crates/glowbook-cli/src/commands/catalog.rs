use anyhow::Result;
use glowbook_application::AppContext;

pub async fn services(context: &AppContext) -> Result<()> {
    let services = context.api.fetch_services().await?;
    println!("💅 {} services available:", services.len());
    for service in &services {
        println!(
            "  {}  {} ({}, {} min)  ₹{}",
            service.id, service.title, service.category, service.duration_min, service.price
        );
    }
    Ok(())
}

pub async fn service(context: &AppContext, id: &str) -> Result<()> {
    let service = context.api.fetch_service(id).await?;
    println!("{}", serde_json::to_string_pretty(&service)?);
    Ok(())
}

pub async fn offers(context: &AppContext) -> Result<()> {
    let offers = context.api.fetch_offers().await?;
    if offers.is_empty() {
        println!("No offers running right now.");
        return Ok(());
    }
    for offer in &offers {
        println!(
            "🏷️  {} - {}% off (service {})",
            offer.title, offer.discount_percent, offer.service_id
        );
        println!("    {}", offer.description);
    }
    Ok(())
}

pub async fn gallery(context: &AppContext) -> Result<()> {
    let media = context.api.fetch_previous_work().await?;
    for item in &media {
        println!("  [{}] {}", item.kind, item.url);
    }
    Ok(())
}

pub async fn feedbacks(context: &AppContext) -> Result<()> {
    let feedbacks = context.api.fetch_feedbacks().await?;
    for feedback in &feedbacks {
        println!("💬 {}: {}", feedback.name, feedback.text);
    }
    Ok(())
}
