//! Support command implementation

use anyhow::Result;
use pageturn_core::views::SupportView;

/// Print support topics, FAQs and contact channels
pub fn support(json: bool) -> Result<()> {
    let view = SupportView::default();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", view.title);
    println!("{}", view.intro);

    println!();
    println!("Frequently asked questions:");
    for faq in &view.faqs {
        println!();
        println!("Q: {}", faq.question);
        println!("A: {}", faq.answer);
    }

    println!();
    println!("Contact us:");
    for channel in &view.channels {
        println!("  {:<12} {} ({})", channel.name, channel.description, channel.availability);
    }

    Ok(())
}
