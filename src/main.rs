use nanobanana_studio::{
    commands::{Command, HELP},
    logger,
    views, ArtStyle, DownloadTarget, GeminiClient, ImageClient, SourceImage, Studio,
    StudioConfig, StudioView,
};
use std::io::IsTerminal;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = StudioConfig::from_env();
    logger::init_with_config(config.logger_config())?;
    if dotenv_loaded {
        log::info!("✅ .env file loaded");
    } else {
        log::debug!("No .env file found, using process environment");
    }

    logger::log_startup_info("NanoBanana Studio", env!("CARGO_PKG_VERSION"), &config.gemini.model);
    logger::log_config_info(&config);

    let client = match GeminiClient::new(config.gemini.clone()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to initialize Gemini client: {}", e);
            return Err(e.into());
        }
    };
    let model = client.image().model().to_string();

    let mut studio = Studio::with_defaults(
        client.image().clone(),
        config.default_style,
        config.default_aspect_ratio,
    );
    let use_colors = std::io::stdout().is_terminal();

    println!("{}\n", HELP);
    println!("{}", views::render(&StudioView::from_state(studio.state(), &model), use_colors));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Prompt(text) => studio.update_prompt(text),
            Command::Style(style) => studio.update_style(style),
            Command::Ratio(ratio) => studio.update_aspect_ratio(ratio),
            Command::Image(path) => match SourceImage::from_file(&path).await {
                Ok(image) => studio.set_source_image(Some(image)),
                Err(e) => {
                    log::error!("Could not read {}: {}", path.display(), e);
                    continue;
                }
            },
            Command::ClearImage => studio.set_source_image(None),
            Command::Generate => {
                println!("{}", if studio.state().is_edit_mode() { "Editing..." } else { "Generating..." });
                studio.submit().await;
            }
            Command::Save => {
                match studio.state().result().and_then(|r| r.image_url.clone()) {
                    Some(data_url) => {
                        let target = DownloadTarget::now(data_url);
                        match target.save_to(&config.output_dir).await {
                            Ok(path) => println!("Saved {}", path.display()),
                            Err(e) => log::error!("Failed to save image: {}", e),
                        }
                    }
                    None => println!("Nothing to save yet"),
                }
                continue;
            }
            Command::Styles => {
                for style in ArtStyle::ALL {
                    println!("  {}", style);
                }
                continue;
            }
            Command::Help => {
                println!("{}", HELP);
                for info in ImageClient::supported_models() {
                    println!("Model: {} - {} ({})", info.id, info.name, info.provider);
                }
                continue;
            }
            Command::Quit => break,
        }

        println!("{}", views::render(&StudioView::from_state(studio.state(), &model), use_colors));
    }

    log::info!("👋 Bye");
    Ok(())
}
