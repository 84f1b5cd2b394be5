use anyhow::Result;
use trim_optimizer::QuotaOptimizer;

pub fn handle(quota: &str, show_rules: bool) -> Result<()> {
    let (optimized, rewrites) = QuotaOptimizer::new().optimize_traced(quota);

    println!("{}", optimized);

    if show_rules {
        if rewrites.is_empty() {
            println!("\nNo rules fired.");
        } else {
            println!("\nRules:");
            for info in rewrites {
                println!("  {}: {}", info.rule, info.count);
            }
        }
        println!(
            "\n{} → {} chars",
            quota.chars().count(),
            optimized.chars().count()
        );
    }

    Ok(())
}
