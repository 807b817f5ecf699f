use dupsong::cli::run;

fn main() -> anyhow::Result<()> {
    run()
}
