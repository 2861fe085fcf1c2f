fn main() -> anyhow::Result<()> {
    gocatalog::cli::run_cli()
}
