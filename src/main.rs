use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tokio::sync::mpsc;
use tokio::time::sleep_until;

use redshift_setup::app::action::Action;
use redshift_setup::app::effect::Effect;
use redshift_setup::app::effect_runner::EffectRunner;
use redshift_setup::app::exit_report::ExitReport;
use redshift_setup::app::ports::DataSourceStore;
use redshift_setup::app::reducer::reduce;
use redshift_setup::app::render_schedule::next_animation_deadline;
use redshift_setup::app::state::{AppState, FormProps};
use redshift_setup::domain::{DataSourceId, GatewayIp, WorkspaceId};
use redshift_setup::error;
use redshift_setup::infra::adapters::TomlDataSourceStore;
use redshift_setup::infra::config::paths::resolve_config_dir;
use redshift_setup::infra::logging;
use redshift_setup::ui::adapters::TuiRenderer;
use redshift_setup::ui::event::handler::handle_event;
use redshift_setup::ui::tui::TuiRunner;

/// Create or edit a Redshift data source from the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Workspace the data source belongs to
    #[arg(long, env = "REDSHIFT_SETUP_WORKSPACE")]
    workspace: String,

    /// Edit the stored data source with this id instead of creating one
    #[arg(long, value_name = "DATA_SOURCE_ID")]
    edit: Option<String>,

    /// Additional context for the AI assistant; overrides the stored value
    /// of the data source being edited
    #[arg(long, requires = "edit")]
    context: Option<String>,

    /// Fixed gateway IP shown to the user
    #[arg(long, env = "REDSHIFT_SETUP_GATEWAY_IP")]
    gateway_ip: Option<String>,

    /// Directory holding data_sources.toml and logs
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    let config_dir = resolve_config_dir(args.config_dir.as_deref())?;
    let _log_guard = logging::init(&config_dir)?;

    let store = Arc::new(TomlDataSourceStore::with_config_dir(config_dir));

    let existing = match &args.edit {
        Some(id) => {
            let found = store
                .find_by_id(&DataSourceId::from_string(id.as_str()))
                .wrap_err_with(|| format!("Could not read {}", store.storage_path().display()))?;
            Some(found.ok_or_else(|| eyre!("Data source not found: {id}"))?)
        }
        None => None,
    };

    let mut props = FormProps::new(WorkspaceId::new(args.workspace));
    if let Some(gateway_ip) = args.gateway_ip {
        props.gateway_ip = GatewayIp::new(gateway_ip);
    }
    props.additional_context = args.context.clone().or_else(|| {
        existing
            .as_ref()
            .and_then(|e| e.additional_context.clone())
    });
    props.existing = existing.map(|e| e.record);

    let mut state = AppState::new(props);
    state.context_override = args.context;
    tracing::info!(
        mode = ?state.form.mode(),
        workspace = %state.workspace_id,
        "form mounted"
    );

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);
    let effect_runner = EffectRunner::new(
        Arc::clone(&store) as _,
        Arc::clone(&store) as _,
        action_tx.clone(),
    );

    let mut tui = TuiRunner::new()?;
    tui.enter()?;
    state.terminal_height = tui.terminal().size()?.height;

    let result = run(&mut tui, &mut state, &effect_runner, &action_tx, &mut action_rx).await;
    tui.exit()?;
    result?;

    if let Some(exit) = &state.exit {
        let line = ExitReport::from_exit(exit).to_json_line()?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}")?;
    }

    Ok(())
}

async fn run(
    tui: &mut TuiRunner,
    state: &mut AppState,
    effect_runner: &EffectRunner,
    action_tx: &mpsc::Sender<Action>,
    action_rx: &mut mpsc::Receiver<Action>,
) -> Result<()> {
    loop {
        let now = Instant::now();
        let deadline = next_animation_deadline(state, now);

        tokio::select! {
            event = tui.next_event() => {
                // The input task only stops on a stream error or a panic.
                let Some(event) = event else {
                    return Err(eyre!("terminal input stopped; see the log for details"));
                };
                let action = handle_event(event, state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(state, action, now);

                if state.render_dirty && !effects.iter().any(Effect::is_render) {
                    state.clear_expired_timers(now);
                    effects.push(Effect::Render);
                }

                let mut renderer = TuiRenderer::new(tui);
                effect_runner.run(effects, &mut renderer, state).await?;
                state.clear_dirty();
            }
            // Spinner frame or message timeout
            () = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let now = Instant::now();
                let effects = reduce(state, Action::Render, now);
                let mut renderer = TuiRenderer::new(tui);
                effect_runner.run(effects, &mut renderer, state).await?;
                state.clear_dirty();
            }
        }

        if state.should_quit {
            return Ok(());
        }
    }
}
