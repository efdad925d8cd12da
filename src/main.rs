fn main() -> anyhow::Result<()> {
    arigato::run()
}
