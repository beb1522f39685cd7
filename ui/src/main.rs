use quest_search_ui::client::HttpSearchClient;
use quest_search_ui::commands::{HELP, Input, parse_input, resolve_question};
use quest_search_ui::config::ClientConfig;
use quest_search_ui::controller::{ControllerError, ControllerSettings, SearchController};
use quest_search_ui::render::render;

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    let client = HttpSearchClient::new(&config.search_url);
    tracing::info!("Searching against {}", client.endpoint());

    let controller = SearchController::spawn(
        Arc::new(client),
        ControllerSettings {
            page_size: config.page_size,
            debounce: config.debounce,
            request_timeout: config.request_timeout,
        },
    );

    let mut updates = controller.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let screen = render(&updates.borrow_and_update());
            println!("{}", screen);
        }
    });

    println!("{}", render(&controller.view()));
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = match parse_input(&line) {
            Ok(input) => input,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if input == Input::Quit {
            break;
        }

        if let Err(e) = dispatch(&controller, input).await {
            println!("{}", e);
        }
    }

    controller.shutdown().await;
    printer.abort();

    Ok(())
}

async fn dispatch(controller: &SearchController, input: Input) -> anyhow::Result<()> {
    match input {
        Input::Query(query) => controller.set_query(query).await?,
        Input::Page(page) => controller.set_page(page).await?,
        Input::Next => controller.next_page().await?,
        Input::Prev => controller.prev_page().await?,
        Input::Filter(filter) => controller.set_filter(filter).await?,
        Input::Select { question, option } => {
            let id = resolve_question(&controller.view(), question)?;
            controller.select_option(id, option - 1).await?;
        }
        Input::Check { question } => {
            let id = resolve_question(&controller.view(), question)?;
            match controller.check_answer(id).await {
                Ok(None) => println!("Select an option first."),
                Ok(Some(_)) => {}
                Err(ControllerError::Answer(e)) => println!("{}", e),
                Err(e) => return Err(e.into()),
            }
        }
        Input::Help => println!("{}", HELP),
        Input::Quit => {}
    }

    Ok(())
}
