fn main() -> anyhow::Result<()> {
    aurebesh_codex::run()
}
