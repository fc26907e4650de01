fn main() -> anyhow::Result<()> {
    dictation_cli::run()
}
