//! Subcommand handlers.

use std::path::Path;

use super::args::{Args, Command, ConfigAction, CreateArgs, GenArgs};
use super::error::CliError;
use crate::ascii;
use crate::config::{self, Config, ProvidersConfig, DEFAULT_CONFIG_TOML};
use crate::image_source;
use crate::providers::{self, Generated, ProviderSettings};

/// Dispatch a parsed command line.
pub fn run(args: Args) -> Result<(), CliError> {
    let config_path = args.config.as_deref();
    match &args.command {
        Command::Create(create) => {
            let config = Config::load(config_path)?;
            run_create(create, &config)
        }
        Command::Gen(gen) => {
            let config = Config::load(config_path)?;
            run_gen(gen, &config)
        }
        Command::Cfg { action } => {
            handle_config_action(action.clone().unwrap_or(ConfigAction::Show), config_path)
        }
    }
}

/// Decode the image and render it with config file settings plus flags.
pub fn create_art(args: &CreateArgs, config: &Config) -> Result<String, CliError> {
    let mut settings = config.render.clone();
    args.apply_to(&mut settings);
    let render_config = settings.to_render_config()?;

    let buffer = image_source::load_image(&args.file)?;
    log::info!(
        "Rendering {} ({}x{}) at {} columns",
        args.file.display(),
        buffer.width(),
        buffer.height(),
        render_config.output_width
    );
    Ok(ascii::render(&buffer, &render_config)?)
}

pub fn run_create(args: &CreateArgs, config: &Config) -> Result<(), CliError> {
    let art = create_art(args, config)?;
    write_output(&art, args.output.as_deref())
}

/// Pick provider, model and style from flags and config, then generate.
pub async fn generate_art(
    args: &GenArgs,
    providers_config: &ProvidersConfig,
    mut settings: ProviderSettings,
) -> Result<Generated, CliError> {
    let provider = match args.provider {
        Some(p) => p.into(),
        None => providers_config.default_provider()?,
    };
    if let Some(model) = &args.model {
        settings.set_model(provider, model.clone());
    }
    let style = args.style.as_deref().unwrap_or(&providers_config.style);
    let fallback = providers_config.fallback && !args.no_fallback;

    let generated =
        providers::generate_with_fallback(provider, &args.prompt, style, &settings, fallback)
            .await?;
    if generated.provider != provider {
        log::info!("Art produced by {} instead of {}", generated.provider, provider);
    }
    Ok(generated)
}

pub fn run_gen(args: &GenArgs, config: &Config) -> Result<(), CliError> {
    let settings = config.providers.resolve_from_env();
    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    let generated = rt.block_on(generate_art(args, &config.providers, settings))?;
    write_output(&generated.text, args.output.as_deref())
}

/// Print art to stdout, or save it when an output path is given.
pub fn write_output(art: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", art)).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            println!("Art saved to {}", path.display());
        }
        None => println!("{}", art),
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) -> Result<(), CliError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(config_path.as_path()))?;
            print!("{}", describe(&config));
            println!();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

/// Write the default config file, refusing to overwrite an existing one.
pub fn init_config(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        return Err(CliError::ConfigExists(path.to_path_buf()));
    }

    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(write_err)
}

/// Human-readable summary of the effective configuration.
fn describe(config: &Config) -> String {
    let render = &config.render;
    let providers = &config.providers;
    let key_status = match std::env::var(&providers.openai.api_key_env) {
        Ok(key) if !key.trim().is_empty() => "set",
        _ => "not set",
    };

    let mut out = String::from("Current configuration:\n");
    out.push_str(&format!("  Width: {}\n", render.width));
    match &render.ramp {
        Some(ramp) => out.push_str(&format!("  Ramp: {:?}\n", ramp)),
        None => out.push_str(&format!("  Charset: {}\n", render.charset)),
    }
    out.push_str(&format!("  Aspect: {}\n", render.aspect));
    out.push_str(&format!("  Row stride: {}\n", render.row_stride));
    out.push_str(&format!("  Luminance: {}\n", render.luminance));
    out.push_str(&format!("  Quantize: {}\n", render.quantize));
    out.push_str(&format!("  Threshold: {}\n", render.threshold));
    out.push_str(&format!("  Invert: {}\n", if render.invert { "yes" } else { "no" }));
    out.push_str(&format!("  Provider: {}\n", providers.default));
    out.push_str(&format!("  Style: {}\n", providers.style));
    out.push_str(&format!(
        "  Fallback: {}\n",
        if providers.fallback { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "  OpenAI: {} at {} ({} {})\n",
        providers.openai.model, providers.openai.base_url, providers.openai.api_key_env, key_status
    ));
    out.push_str(&format!(
        "  Ollama: {} at {}\n",
        providers.ollama.model, providers.ollama.host
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProviderName;
    use crate::providers::Provider;
    use std::path::PathBuf;

    fn write_png(dir: &Path, name: &str, img: image::RgbImage) -> PathBuf {
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    fn gen_args(prompt: &str) -> GenArgs {
        GenArgs {
            prompt: prompt.to_string(),
            provider: None,
            model: None,
            style: None,
            output: None,
            no_fallback: false,
        }
    }

    #[test]
    fn test_create_art_uses_flags_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(
            dir.path(),
            "black.png",
            image::RgbImage::from_pixel(4, 4, image::Rgb([0, 0, 0])),
        );
        let config = Config::parse("[render]\nwidth = 2\nramp = \"ab\"\n").unwrap();
        let args = CreateArgs {
            file: path,
            width: Some(4),
            ..CreateArgs::default()
        };
        assert_eq!(create_art(&args, &config).unwrap(), "aaaa\naaaa");
    }

    #[test]
    fn test_create_art_invalid_config_fails_before_decoding() {
        let config = Config::parse("[render]\nluminance = \"hdr\"\n").unwrap();
        let args = CreateArgs {
            file: PathBuf::from("/does/not/exist.png"),
            ..CreateArgs::default()
        };
        assert!(matches!(
            create_art(&args, &config),
            Err(CliError::Render(ascii::RenderError::UnsupportedConfig { .. }))
        ));
    }

    #[test]
    fn test_create_art_missing_file() {
        let args = CreateArgs {
            file: PathBuf::from("/does/not/exist.png"),
            ..CreateArgs::default()
        };
        assert!(matches!(
            create_art(&args, &Config::default()),
            Err(CliError::Image(_))
        ));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");
        write_output("ab\ncd", Some(path.as_path())).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ab\ncd\n");
    }

    #[test]
    fn test_init_config_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        init_config(&path).unwrap();
        let written = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(written, Config::default());
        assert!(matches!(init_config(&path), Err(CliError::ConfigExists(_))));
    }

    #[test]
    fn test_describe_lists_settings() {
        let text = describe(&Config::default());
        assert!(text.contains("Width: 80"));
        assert!(text.contains("Charset: standard"));
        assert!(text.contains("Provider: openai"));
        assert!(text.contains("Ollama: llama2 at http://localhost:11434"));
    }

    #[tokio::test]
    async fn test_generate_art_offline_provider() {
        let mut args = gen_args("kite");
        args.provider = Some(ProviderName::Offline);
        args.style = Some("banner".to_string());
        let generated =
            generate_art(&args, &ProvidersConfig::default(), ProviderSettings::default())
                .await
                .unwrap();
        assert_eq!(generated.provider, Provider::Offline);
        assert_eq!(generated.text, "##########\n# kite #\n##########");
    }

    #[tokio::test]
    async fn test_generate_art_config_default_provider_and_fallback() {
        let providers_config = ProvidersConfig::default();
        let generated =
            generate_art(&gen_args("kite"), &providers_config, ProviderSettings::default())
                .await
                .unwrap();
        assert_eq!(generated.provider, Provider::Offline);

        let mut args = gen_args("kite");
        args.no_fallback = true;
        let result = generate_art(&args, &providers_config, ProviderSettings::default()).await;
        assert!(matches!(
            result,
            Err(CliError::Provider(providers::ProviderError::MissingApiKey { .. }))
        ));
    }

    #[tokio::test]
    async fn test_generate_art_unknown_default_provider() {
        let providers_config = ProvidersConfig {
            default: "mystery".to_string(),
            ..ProvidersConfig::default()
        };
        let result =
            generate_art(&gen_args("kite"), &providers_config, ProviderSettings::default()).await;
        assert!(matches!(
            result,
            Err(CliError::Provider(providers::ProviderError::UnknownProvider(_)))
        ));
    }
}
