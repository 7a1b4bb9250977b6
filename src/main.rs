use anyhow::{anyhow, Context, Result};
use std::env;
use std::io;

// Use library instead of local modules
use paystation::{PayStation, ProfileRegistry, SystemClock};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let profile = args.get(1).map(String::as_str).unwrap_or("AlphaTown");
    let coins: Vec<u32> = if args.len() > 2 {
        args[2..]
            .iter()
            .map(|arg| {
                arg.parse::<u32>()
                    .with_context(|| format!("Not a coin value: {arg}"))
            })
            .collect::<Result<_>>()?
    } else {
        vec![25, 25, 10, 5]
    };

    run_session(profile, &coins)
}

fn run_session(profile: &str, coins: &[u32]) -> Result<()> {
    let registry = ProfileRegistry::new();

    let factory = registry.factory(profile).ok_or_else(|| {
        anyhow!(
            "Unknown profile '{}' (available: {})",
            profile,
            registry.profile_names().join(", ")
        )
    })?;

    println!("🅿️  Pay station online - profile: {}", profile);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut station = PayStation::new(factory);

    for &coin in coins {
        match station.add_payment(coin) {
            Ok(()) => println!(
                "🪙 Inserted {:>2}¢ → display: {} minutes",
                coin,
                station.read_display()
            ),
            Err(err) => println!("❌ Rejected: {}", err),
        }
    }

    println!("\n🧾 Buying...\n");
    let receipt = station.buy();
    receipt.render(&SystemClock, &mut io::stdout())?;

    println!("\n✅ Transaction complete (display back to {} minutes)", station.read_display());

    Ok(())
}
