use anyhow::Context;
use showroom_cli::Session;

fn main() -> anyhow::Result<()> {
    showroom_observability::init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::seeded(stdin.lock(), stdout.lock());

    session.run().context("showroom session aborted")?;
    Ok(())
}
