//! Interactive Session Mode
//!
//! A line-oriented loop that owns one `Studio` for its lifetime, which is
//! what gives the gallery its in-memory accumulation semantics: a haiku
//! generated while the gallery has images attaches to the newest image, and
//! `retry` re-runs the last prompt.

use std::io::Write;
use std::path::PathBuf;

use tokio::io::AsyncBufReadExt;

use studio_core::{Emotion, Haiku, ImageBackend, Studio};

/// Run the interactive loop until `quit` or end of input
pub async fn run<B: ImageBackend>(studio: &mut Studio<B>) -> anyhow::Result<()> {
    println!("kigo session - 'help' lists commands, 'quit' leaves");

    let mut current_style = studio.config().default_style.clone();
    let mut last_haiku: Option<Haiku> = None;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    prompt();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (trimmed, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => help(),
            "generate" => {
                if rest.is_empty() {
                    println!("usage: generate <prompt>");
                } else {
                    let image = studio.generate_image(rest, &current_style).await;
                    crate::print_image(&image);
                }
            }
            "haiku" => {
                if rest.is_empty() {
                    println!("usage: haiku <text>");
                } else {
                    let haiku = studio.compose_from_text(rest, None);
                    crate::print_haiku(&haiku, false)?;
                    attachment_note(studio);
                    last_haiku = Some(haiku);
                }
            }
            "mood" => {
                let emotion = if rest.is_empty() {
                    studio.random_emotion()
                } else {
                    match rest.parse::<Emotion>() {
                        Ok(e) => e,
                        Err(e) => {
                            println!("{e}");
                            prompt();
                            continue;
                        }
                    }
                };
                let haiku = studio.compose_from_emotion(emotion);
                crate::print_haiku(&haiku, false)?;
                attachment_note(studio);
                last_haiku = Some(haiku);
            }
            "retry" => match studio.retry_last().await {
                Some(image) => crate::print_image(&image),
                None => println!("nothing to retry yet"),
            },
            "gallery" => {
                if studio.gallery().is_empty() {
                    println!("gallery is empty");
                }
                for image in studio.gallery().iter() {
                    let poem_marker = if image.haiku.is_some() { " [haiku]" } else { "" };
                    println!(
                        "{}  {:<10} {}{poem_marker}",
                        image.id, image.style, image.prompt
                    );
                }
            }
            "download" => {
                let mut args = rest.split_whitespace();
                match args.next() {
                    None => println!("usage: download <image-id> [dir]"),
                    Some(id) => {
                        let dir = PathBuf::from(args.next().unwrap_or("."));
                        match studio.download_image(id, &dir).await {
                            Ok(path) => println!("saved: {}", path.display()),
                            Err(e) => println!("download failed: {e:#}"),
                        }
                    }
                }
            }
            "export" => match &last_haiku {
                None => println!("no haiku generated yet"),
                Some(haiku) => {
                    let dir = PathBuf::from(if rest.is_empty() { "." } else { rest });
                    match studio.export_haiku(haiku, &dir).await {
                        Ok(path) => println!("exported: {}", path.display()),
                        Err(e) => println!("export failed: {e:#}"),
                    }
                }
            },
            "suggest" => {
                for (i, suggestion) in studio.suggestions().iter().enumerate() {
                    println!("{:>2}. {suggestion}", i + 1);
                }
            }
            "styles" => crate::print_styles(studio),
            "style" => {
                if studio.styles().get(rest).is_some() {
                    current_style = rest.to_string();
                    println!("style set to {current_style}");
                } else {
                    println!("unknown style '{rest}' (see 'styles')");
                }
            }
            other => println!("unknown command '{other}' (try 'help')"),
        }

        prompt();
    }

    Ok(())
}

fn attachment_note<B: ImageBackend>(studio: &Studio<B>) {
    if let Some(image) = studio.gallery().latest() {
        if image.haiku.is_some() {
            println!("(attached to latest image {})", image.id);
        }
    }
}

fn prompt() {
    print!("kigo> ");
    let _ = std::io::stdout().flush();
}

fn help() {
    println!("commands:");
    println!("  generate <prompt>        generate an image in the current style");
    println!("  haiku <text>             generate a haiku from text");
    println!("  mood [emotion]           generate a haiku from a mood (random if omitted)");
    println!("  retry                    re-run the last prompt");
    println!("  gallery                  list this session's images");
    println!("  download <id> [dir]      save a gallery image locally");
    println!("  export [dir]             export the last haiku as .txt");
    println!("  suggest                  list prompt suggestions");
    println!("  styles                   list art styles");
    println!("  style <id>               set the current style");
    println!("  help                     this text");
    println!("  quit                     leave the session");
}
