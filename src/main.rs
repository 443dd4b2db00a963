use answer_hook::{
    directus::DirectusClient,
    hook::HookConfig,
    names,
    services::review::{AcceptOutcome, DeclineOutcome, ReviewService},
    AppState,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the answer filter over HTTP.
    Serve {
        /// The address to bind to.
        #[arg(short, long, env, default_value = "127.0.0.1:8056")]
        address: String,

        /// Collections whose items carry encoded answers.
        #[arg(
            long,
            env = "ANSWER_HOOK_COLLECTIONS",
            value_delimiter = ',',
            default_values_t = names::DEFAULT_COLLECTIONS.iter().map(|c| c.to_string())
        )]
        collections: Vec<String>,

        /// Choice set applied to payloads that carry no `choices` key.
        #[arg(long, env = "ANSWER_HOOK_DEFAULT_CHOICES", value_delimiter = ',')]
        default_choices: Option<Vec<String>>,
    },

    /// Check that the CMS is reachable and healthy.
    Ping {
        /// CMS base URL.
        #[arg(long, env = "DIRECTUS_URL", default_value = names::DEFAULT_DIRECTUS_URL)]
        url: String,
    },

    /// Review AI-generated questions waiting in the staging collection.
    Review {
        /// CMS base URL.
        #[arg(long, env = "DIRECTUS_URL", default_value = names::DEFAULT_DIRECTUS_URL)]
        url: String,

        /// Static access token forwarded as a bearer token.
        #[arg(long, env = "DIRECTUS_TOKEN")]
        token: Option<String>,

        #[command(subcommand)]
        action: ReviewAction,
    },
}

#[derive(Subcommand, Debug)]
enum ReviewAction {
    /// List questions pending review.
    Pending,
    Accept {
        id: i64,
        #[arg(long)]
        user: String,
    },
    Decline {
        id: i64,
        #[arg(long)]
        user: String,
        #[arg(long)]
        reason: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "answer_hook=debug,axum=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Serve {
            address,
            collections,
            default_choices,
        } => {
            let hook = HookConfig {
                collections,
                default_choices,
            };
            tracing::info!("filtering collections {:?}", hook.collections);

            let app = answer_hook::router(AppState::new(hook));
            let address = address.parse::<std::net::SocketAddr>()?;
            let listener = tokio::net::TcpListener::bind(address).await?;
            tracing::info!("listening on {address}");
            axum::serve(listener, app).await?;
        }
        Command::Ping { url } => {
            let health = DirectusClient::new(url.as_str(), None).health().await?;
            println!("{url}: {}", health.status);
        }
        Command::Review { url, token, action } => {
            let service = ReviewService::new(DirectusClient::new(url, token));
            review(&service, action).await?;
        }
    }

    Ok(())
}

async fn review(service: &ReviewService, action: ReviewAction) -> color_eyre::Result<()> {
    match action {
        ReviewAction::Pending => {
            for question in service.pending().await? {
                let prompt: String = question.question_prompt.chars().take(80).collect();
                println!("#{} - {prompt}", question.id);
                for option in &question.ai_answer_options_staging {
                    let mark = if option.is_correct { '*' } else { ' ' };
                    println!("    [{mark}] {}", option.option_text);
                }
            }
        }
        ReviewAction::Accept { id, user } => match service.accept(id, &user).await? {
            AcceptOutcome::Accepted => println!("accepted #{id}"),
            AcceptOutcome::NotPending => println!("#{id} is not pending review"),
        },
        ReviewAction::Decline { id, user, reason } => {
            match service.decline(id, &user, &reason).await? {
                DeclineOutcome::Declined => println!("declined #{id}"),
                DeclineOutcome::EmptyReason => println!("a reason is required to decline"),
                DeclineOutcome::NotPending => println!("#{id} is not pending review"),
            }
        }
    }

    Ok(())
}
