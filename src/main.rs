//! StudyBuddy Telegram Bot
//!
//! Main application entry point

use std::process::ExitCode;
use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use StudyBuddy::{
    StudyBuddyError,
    config::Settings,
    utils::logging,
    middleware::LogMiddleware,
    services::{Notifier, TelegramNotifier},
    state::{FlowManager, SessionStore},
    handlers::{
        Command,
        Router,
        messages::{handle_command, handle_message},
    },
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> ExitCode {
    // Configuration problems are fatal before anything else starts
    let settings = match Settings::new().and_then(|settings| settings.validate().map(|_| settings)) {
        Ok(settings) => settings,
        Err(e) => return startup_failure(e),
    };

    // Initialize logging
    let _log_guard = match logging::init_logging(&settings.logging) {
        Ok(guard) => guard,
        Err(e) => return startup_failure(e),
    };

    info!("Starting {}...", StudyBuddy::info());

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    // Initialize conversation state and the operator notifier
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::from_config(bot.clone(), &settings.bot));
    let mut router = Router::new(SessionStore::new(), FlowManager::new(), notifier);

    // Needed to tell `/start@us` from commands meant for other bots in groups
    match bot.get_me().await {
        Ok(me) => match me.user.username.clone() {
            Some(username) => {
                info!(username = %username, "Bot identity resolved");
                router = router.with_bot_username(username);
            }
            None => warn!("Bot has no username, /cmd@name mentions will be treated as text"),
        },
        Err(e) => warn!(error = %e, "Failed to fetch bot identity, /cmd@name mentions will be treated as text"),
    }
    let router = Arc::new(router);
    let log_middleware = Arc::new(LogMiddleware::default());

    info!(operator_chat_id = settings.bot.operator_chat_id, "Operator chat configured");

    // Create the handler
    let handler = create_handler();

    // Create dispatcher with dependencies registered
    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router, log_middleware])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");

    dispatcher.dispatch().await;

    info!("StudyBuddy bot has been shut down.");

    ExitCode::SUCCESS
}

/// Report a startup error and pick the exit status
fn startup_failure(e: StudyBuddyError) -> ExitCode {
    eprintln!("StudyBuddy failed to start [{}]: {}", e.severity(), e);
    ExitCode::FAILURE
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
    .inspect(|update: Update, log_middleware: Arc<LogMiddleware>| log_middleware.log_update(&update))
    .branch(Update::filter_message()
        .branch(
            // Handle commands
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_commands)
        )
        .branch(
            // Everything else goes through the router
            dptree::endpoint(handle_messages)
        )
    )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    router: Arc<Router>,
    log_middleware: Arc<LogMiddleware>,
) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, &router, &log_middleware).await {
        logging::log_handler_error("command", &e);
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    router: Arc<Router>,
    log_middleware: Arc<LogMiddleware>,
) -> HandlerResult {
    if let Err(e) = handle_message(bot, msg, &router, &log_middleware).await {
        logging::log_handler_error("message", &e);
        return Err(e.into());
    }

    Ok(())
}
