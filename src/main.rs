use recent_projects::{cli, logging};

fn main() -> anyhow::Result<()> {
    logging::init();
    cli::run()
}
