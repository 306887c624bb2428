use anyhow::Result;

fn main() -> Result<()> {
    rolodex::run()
}
