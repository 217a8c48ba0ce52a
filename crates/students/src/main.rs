use anyhow::{Context, Result};

use recordkit_students::{ResultSheet, read_count, read_student};

fn main() -> Result<()> {
    recordkit_observability::init();

    let mut sheet = ResultSheet::new();
    {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut input = stdin.lock();
        let mut out = stdout.lock();

        let count = read_count(&mut input, &mut out).context("reading student count")?;
        for ordinal in 1..=count {
            let student = read_student(&mut input, &mut out, ordinal)
                .with_context(|| format!("reading student {ordinal}"))?;
            sheet.add(student);
        }
    }

    println!("\n--- Student Results ---");
    for line in sheet.lines() {
        println!("{line}");
    }

    sheet.save("results.txt").context("saving results.txt")?;
    println!("Results saved to 'results.txt'.");
    tracing::info!(students = sheet.len(), "results written");

    Ok(())
}
