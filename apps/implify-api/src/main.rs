use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = implify_api::Args::parse();
	implify_api::run(args).await
}
