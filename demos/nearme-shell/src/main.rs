//! NearMe shell: the store-discovery app's navigation, wired up.
//!
//! Drives a scripted session through the full stack — file-backed
//! session store, default guard table, one stub page per route — and
//! logs every transition. Run it twice to watch the second run resume
//! the persisted session.

use std::time::Duration;

use wayline::prelude::*;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

struct StaticPage {
    title: &'static str,
    body: &'static str,
}

impl Page for StaticPage {
    fn render(&mut self, container: &mut Container) {
        container.set_html(format!(
            "<main><h1>{}</h1><p>{}</p></main>",
            self.title, self.body
        ));
    }
}

// A fn-pointer registry can't close over data, so each route gets its
// own zero-capture constructor, stamped out here.
macro_rules! static_page {
    ($title:expr, $body:expr) => {
        || {
            Box::new(StaticPage {
                title: $title,
                body: $body,
            }) as Box<dyn Page>
        }
    };
}

fn nearme_registry() -> PageRegistry {
    PageRegistry::new()
        .register(Route::Root, static_page!("NearMe", "Discover stores near you."))
        .register(Route::Home, static_page!("NearMe", "Discover stores near you."))
        .register(Route::Landing, static_page!("Welcome", "Local stores, on a map."))
        .register(Route::Login, static_page!("Log in", "Store owner? Sign in here."))
        .register(Route::Register, static_page!("Register", "List your store on NearMe."))
        .register(Route::Dashboard, static_page!("Dashboard", "Your store at a glance."))
        .register(Route::Statistics, static_page!("Statistics", "Visits and activity."))
        .register(
            Route::ProductsUpload,
            static_page!("Upload products", "Import your catalog."),
        )
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), WaylineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wayline=debug".into()),
        )
        .init();

    let session_dir = std::env::temp_dir().join("nearme-shell-session");

    let ctx = AppContext::builder()
        .registry(nearme_registry())
        .backend(FileBackend::new(&session_dir))
        .build();

    // Simulate a fresh load with the dashboard in the URL hash. Without
    // a live session this resolves to the login page.
    let (handle, loop_task) = ctx.spawn("#/dashboard");

    // The store owner logs in; the router moves off the login page.
    handle.set_authenticated(true)?;

    // They browse around.
    handle.link_click("#/products/upload")?;
    handle.navigate(Route::Statistics)?;

    // Give the 2-second re-validation check a chance to run (it finds a
    // consistent state and does nothing).
    tokio::time::sleep(Duration::from_secs(3)).await;

    // Tab closes: persist and shut down.
    handle.unload()?;

    let router = loop_task.await.expect("event loop task panicked");
    tracing::info!(
        route = %router.current_route(),
        "shell exiting; run again to resume this session"
    );
    println!("{}", router.container().html());
    Ok(())
}
