//! `modboard whoami`

use modboard_core::effects;
use modboard_core::{AdminRepository, CurrentUser};

use super::Backend;
use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

fn detail(user: &CurrentUser, color: bool) -> String {
    let role = if user.is_admin { "admin" } else { "member" };
    format!(
        "{}  {}\n{}        {}\n{}      {}",
        output::label("Username", color),
        user.username,
        output::label("ID", color),
        user.id,
        output::label("Role", color),
        role,
    )
}

/// Unlike `stats`, this works for any signed-in user.
pub async fn handle<R: AdminRepository>(
    backend: &Backend<R>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let user = effects::load_session(&backend.repo, &backend.store)
        .await
        .map_err(|e| backend.fail(e))?
        .ok_or_else(|| CliError::NotSignedIn {
            profile: backend.profile.clone(),
        })?;

    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &user,
        |u| detail(u, color),
        |u| u.username.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
