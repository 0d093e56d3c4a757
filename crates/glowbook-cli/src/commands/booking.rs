use anyhow::{Context, Result};
use chrono::NaiveDate;
use glowbook_application::AppContext;
use glowbook_core::booking::{NewBooking, booking_slots};

pub fn slots(date: &str) -> Result<()> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))?;

    println!("🗓  Slots on {}:", date);
    for slot in booking_slots(date) {
        println!("  {}", slot);
    }
    Ok(())
}

pub async fn book(context: &AppContext, service_ids: Vec<String>, start_time: &str) -> Result<()> {
    let user = context
        .auth
        .current_user()
        .await
        .context("Not signed in. Run: glowbook login <mobile> <pin>")?;

    let booking = context
        .api
        .create_booking(NewBooking {
            service_ids,
            user_id: user.id,
            start_time: start_time.to_string(),
        })
        .await?;

    println!("✅ Booking {} created ({})", booking.id, booking.status);
    println!("   {} at {}", booking.service_ids.join(", "), booking.start_time);
    Ok(())
}

pub async fn bookings(context: &AppContext) -> Result<()> {
    let user = context
        .auth
        .current_user()
        .await
        .context("Not signed in. Run: glowbook login <mobile> <pin>")?;

    let bookings = context.api.list_bookings(&user.id).await?;
    if bookings.is_empty() {
        println!("No bookings yet.");
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(&bookings)?);
    Ok(())
}
