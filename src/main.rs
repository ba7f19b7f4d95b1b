use courses_core::client::NativeClient;
use courses_core::error::Result;
use courses_core::form::SelectionFormModel;
use courses_core::interface::HttpClient;
use courses_core::session::SessionManager;
use courses_core::storage::FileTokenStore;

const TOKEN_FILE: &str = "session.json";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        println!("usage: {} <username> <password> [base-url|logout]", args[0]);
        return Ok(());
    }

    let username = args[1].clone();
    let password = args[2].clone();

    let client = if args.len() > 3 && args[3] != "logout" {
        NativeClient::with_base_url(args[3].clone())?
    } else {
        NativeClient::new().await?
    };
    let store = FileTokenStore::new(TOKEN_FILE);
    let manager = SessionManager::new(client, store);

    manager.subscribe(|state| {
        println!(
            "session changed: logged_in={} user={}",
            state.is_logged_in,
            state.username.as_deref().unwrap_or("-")
        );
    });

    // Start-up sequence of the shell: try the persisted token first,
    // fall back to a credential exchange.
    match manager.restore_session().await {
        Ok(true) => println!("session restored from {TOKEN_FILE}"),
        Ok(false) => {
            println!("no restorable session, logging in...");
            let token = manager.login(&username, &password).await?;
            println!("login ok, token persisted ({} chars)", token.len());
        }
        Err(e) => {
            println!("restore failed ({e}), logging in...");
            let token = manager.login(&username, &password).await?;
            println!("login ok, token persisted ({} chars)", token.len());
        }
    }

    if let Some(profile) = manager.current_profile() {
        println!(
            "hello {} {} (id {})",
            profile.display_name.first, profile.display_name.last, profile.id
        );
    }

    // The selection widget the course form embeds, driven headless.
    let mut form = SelectionFormModel::new();
    form.on_change(|state| {
        println!(
            "selection changed: {}/{} checked, valid={}",
            state.items.iter().filter(|item| item.checked).count(),
            state.items.len(),
            state.valid
        );
    });
    form.rebuild(["Polly Sherman", "Basil Fawlty", "Sybil Fawlty"]);
    form.toggle(1)?;

    if args.len() > 3 && args[3] == "logout" {
        manager.logout();
        println!("logged out, token deleted");
    }

    Ok(())
}
