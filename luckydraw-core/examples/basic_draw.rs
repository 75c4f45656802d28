use luckydraw_core::{DrawError, DrawRequest, NonZeroUsize};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let entries = ["Ann", "", "Bob", "  ", "Cara", "Dan"];
    let request = DrawRequest::new(entries, NonZeroUsize::new(2).ok_or("zero winners")?);

    println!("Entries: {:?}", request.entries);
    println!("Eligible participants: {}", request.eligible_count());

    let result = request.draw()?;
    println!("\nWinners:");
    for (index, winner) in result.iter().enumerate() {
        println!("{}. {} (entry #{})", index + 1, winner.name, winner.position);
    }

    // Asking for more winners than there are names is rejected up front
    let too_many = DrawRequest::new(entries, NonZeroUsize::new(5).ok_or("zero winners")?);
    match too_many.draw() {
        Err(DrawError::InsufficientParticipants {
            requested,
            available,
        }) => println!("\nCannot draw {} from {}", requested, available),
        other => println!("\nUnexpected: {:?}", other),
    }

    Ok(())
}
