//! Plan-builder demo: select services, set a budget, print (or send) the quote.
//!
//! ```sh
//! cargo run --example plan_quote -- -s video-production -s website-development -b 700 --promo
//! ```

use clap::Parser;

use quotient::prelude::*;

/// Arguments for the plan-builder demo
#[derive(Debug, Parser)]
struct Args {
    /// Service ids to select (repeatable)
    #[clap(short, long = "service")]
    services: Vec<String>,

    /// Monthly budget, as typed; nonsense falls back to 0
    #[clap(short, long, default_value = "0")]
    budget: String,

    /// Request the new-client promotion
    #[clap(short, long)]
    promo: bool,

    /// Recipient name for the booking payload
    #[clap(long, default_value = "Demo Client")]
    name: String,

    /// Recipient email for the booking payload
    #[clap(long, default_value = "demo@example.com")]
    email: String,

    /// POST the booking payload to the configured email endpoint
    #[clap(long, env = "QUOTE_SEND")]
    send: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let catalogue = agency_catalogue()?;
    let mut session = PlanBuilder::new(&catalogue, PricingConfig::default());

    for id in &args.services {
        session.toggle_service(id);
    }
    session.set_budget(&args.budget);
    session.set_promo(args.promo);

    if !session.can_compute() {
        println!("No services selected. Available services:");
        for item in &catalogue {
            println!("  {:<22} ${:>4}/mo  {}", item.id, item.cost, item.label);
        }
        return Ok(());
    }

    if !session.promo_eligible() && args.promo {
        println!("(promotion requested but not eligible; it needs two flagship services)");
    }

    let quote = session.compute();
    println!("Base total:  ${}/mo", quote.base_total());
    println!("Final price: {}/mo", quote.formatted_price());
    println!("Note:        {}", quote.message());

    let request = BookingRequest::from_quote(&quote, args.name, args.email, None);

    if args.send {
        let delivery = HttpQuoteDelivery::new(DeliveryConfig::from_env()?);
        submit(&delivery, None, &request).await?;
        println!("Quote emailed to {}", request.recipient_email);
    } else {
        println!("Booking payload:\n{}", serde_json::to_string_pretty(&request)?);
    }

    Ok(())
}
