use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = robo_api::Args::parse();

	robo_api::run(args).await
}
