//! View for `tt uninstall`

use tt::UninstallReport;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_uninstall(report: &UninstallReport, supports_color: bool, supports_unicode: bool) -> String {
    let mut summary = if report.is_success() {
        ResultSummary::success("Uninstall Complete")
    } else {
        ResultSummary::partial("Uninstall Incomplete")
    };

    for removed in &report.removed {
        let label = match &removed.version {
            Some(version) => format!("{} {}", report.program, version),
            None => report.program.to_string(),
        };
        summary.add_item(Icon::Trash, label);
    }

    for failed in &report.failed {
        summary.add_item(
            Icon::Error,
            format!("{}: {}", failed.path.display(), failed.error),
        );
    }

    if let Some(active) = &report.active_cleared {
        summary.add_warning(format!(
            "{} {} was active; no version is selected now",
            report.program, active
        ));
        if report.program.is_versioned() {
            summary.with_next_step(format!("tt binaries switch {}", report.program));
        }
    }

    summary.render(supports_color, supports_unicode)
}
