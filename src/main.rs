use anyhow::Context;
use family_roster::utils::logging::{log_operation_complete, log_operation_start};
use family_roster::{FamilyMember, FamilyRoster, ReportConfig, print_report};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log_operation_start("Building family roster");
    let start = Instant::now();
    let mut family = FamilyRoster::new();
    family.add(FamilyMember::mother("Alice", 45));
    family.add(FamilyMember::father("Bob", 48));
    family.add(FamilyMember::daughter("Charlotte", 15));
    family.add(FamilyMember::son("David", 12));
    log_operation_complete("added", family.len(), Some(start.elapsed()));

    print_report(&family, &ReportConfig::default()).context("Failed to report family roster")?;

    Ok(())
}
