//! Views for `tt binaries list` and `tt binaries switch`

use serde::Serialize;

use tt::application::{HeaderSwitch, ProgramListing, SwitchOutcome};
use tt::domain::entities::{active_version, InstalledVersion, PointerHealth};
use tt::Program;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_listing(listings: &[ProgramListing], supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Binaries.colored(supports_color, supports_unicode),
        ColoredText::info("Installed binaries").bold().render(supports_color)
    );

    for listing in listings {
        out.push_str(&format!(
            "{}:\n",
            ColoredText::plain(listing.program.as_str())
                .bold()
                .render(supports_color)
        ));

        match &listing.versions {
            Ok(versions) if versions.is_empty() => {
                out.push_str(&format!(
                    "  {}\n",
                    ColoredText::dim("not installed").render(supports_color)
                ));
            }
            Ok(versions) => {
                for version in versions {
                    out.push_str(&render_version(version, supports_color, supports_unicode));
                }
            }
            Err(e) => {
                out.push_str(&format!(
                    "  {} {}\n",
                    Icon::Error.colored(supports_color, supports_unicode),
                    ColoredText::error(e.to_string()).render(supports_color)
                ));
            }
        }

        if let Some(problem) = listing.pointer.describe() {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(problem).render(supports_color)
            ));
        }
    }

    out
}

fn render_version(version: &InstalledVersion, supports_color: bool, supports_unicode: bool) -> String {
    if version.is_active {
        format!(
            "  {} {} {}\n",
            Icon::Active.colored(supports_color, supports_unicode),
            ColoredText::success(version.version.as_str())
                .bold()
                .render(supports_color),
            ColoredText::dim("(active)").render(supports_color)
        )
    } else {
        format!(
            "  {} {}\n",
            Icon::Inactive.colored(supports_color, supports_unicode),
            version.version
        )
    }
}

/// One `--json` line per program
#[derive(Debug, Serialize)]
pub struct ListingJson<'a> {
    pub program: Program,
    pub versions: &'a [InstalledVersion],
    pub active: Option<&'a str>,
    pub pointer: &'a PointerHealth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> ListingJson<'a> {
    pub fn from_listing(listing: &'a ProgramListing) -> Self {
        let (versions, error) = match &listing.versions {
            Ok(versions) => (versions.as_slice(), None),
            Err(e) => (&[][..], Some(e.to_string())),
        };
        Self {
            program: listing.program,
            versions,
            active: active_version(versions),
            pointer: &listing.pointer,
            error,
        }
    }
}

pub fn render_switch(outcome: &SwitchOutcome, supports_color: bool, supports_unicode: bool) -> String {
    let target = ColoredText::success(format!("{} {}", outcome.program, outcome.version))
        .bold()
        .render(supports_color);

    let mut out = if outcome.was_active() {
        format!(
            "{} {} is already active\n",
            Icon::Success.colored(supports_color, supports_unicode),
            target
        )
    } else {
        let previous = match &outcome.previous {
            Some(previous) => format!(" (was {})", previous),
            None => String::new(),
        };
        format!(
            "{} Switched to {}{}\n",
            Icon::Switch.colored(supports_color, supports_unicode),
            target,
            ColoredText::dim(previous).render(supports_color)
        )
    };

    if outcome.headers == HeaderSwitch::Missing {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(format!(
                "no headers installed for {} {}; include link removed",
                outcome.program, outcome.version
            ))
            .render(supports_color)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt::domain::entities::LinkKind;
    use tt::TtError;

    fn listing(program: Program, versions: &[(&str, bool)]) -> ProgramListing {
        ProgramListing {
            program,
            versions: Ok(versions
                .iter()
                .map(|(v, active)| InstalledVersion::new(*v, *active))
                .collect()),
            pointer: PointerHealth::Consistent,
        }
    }

    #[test]
    fn plain_listing_shows_every_program() {
        let listings = vec![
            listing(
                Program::Tarantool,
                &[("1.10.0", false), ("2.2.1", false), ("2.10.4", true)],
            ),
            listing(Program::TarantoolEe, &[]),
            ProgramListing {
                program: Program::Tt,
                versions: Ok(vec![InstalledVersion::new("2.0.0", false)]),
                pointer: PointerHealth::Dangling {
                    target: "1.9.0".to_string(),
                },
            },
            ProgramListing {
                program: Program::Tcm,
                versions: Err(TtError::io(
                    "failed to read",
                    "/opt/tt/bin/tcm",
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                )),
                pointer: PointerHealth::Consistent,
            },
        ];

        insta::assert_snapshot!(render_listing(&listings, false, false), @r"
        [BIN] Installed binaries
        tarantool:
          [ ] 1.10.0
          [ ] 2.2.1
          [*] 2.10.4 (active)
        tarantool-ee:
          not installed
        tt:
          [ ] 2.0.0
          [WARN] current link points to 1.9.0, which is not installed
        tcm:
          [FAIL] failed to read /opt/tt/bin/tcm: denied
        ");
    }

    #[test]
    fn listing_json_reports_active_version() {
        let listing = listing(Program::Tcm, &[("1.0.0", false), ("1.1.0", true)]);
        let json = serde_json::to_value(ListingJson::from_listing(&listing)).unwrap();

        assert_eq!(json["program"], "tcm");
        assert_eq!(json["active"], "1.1.0");
        assert_eq!(json["versions"][1]["is_active"], true);
        assert_eq!(json["pointer"]["state"], "consistent");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn unreadable_link_is_shown_in_text_and_json() {
        let listing = ProgramListing {
            program: Program::Tcm,
            versions: Ok(vec![InstalledVersion::new("1.0.0", false)]),
            pointer: PointerHealth::Unreadable {
                link: LinkKind::Binary,
                error: "failed to read link /b/tcm/current: Invalid argument".to_string(),
            },
        };

        let rendered = render_listing(std::slice::from_ref(&listing), false, false);
        assert!(rendered.contains(
            "[WARN] binary link cannot be read: failed to read link /b/tcm/current"
        ));

        let json = serde_json::to_value(ListingJson::from_listing(&listing)).unwrap();
        assert_eq!(json["pointer"]["state"], "unreadable");
        assert_eq!(json["pointer"]["link"], "binary");
        assert!(json["active"].is_null());
    }

    #[test]
    fn switch_mentions_previous_version() {
        let outcome = SwitchOutcome {
            program: Program::Tarantool,
            version: "2.10.4".to_string(),
            previous: Some("1.10.0".to_string()),
            headers: HeaderSwitch::Switched,
        };

        insta::assert_snapshot!(render_switch(&outcome, false, false), @"[SWITCH] Switched to tarantool 2.10.4 (was 1.10.0)");
    }

    #[test]
    fn switch_warns_about_missing_headers() {
        let outcome = SwitchOutcome {
            program: Program::TarantoolEe,
            version: "3.0.0".to_string(),
            previous: None,
            headers: HeaderSwitch::Missing,
        };

        let rendered = render_switch(&outcome, false, false);
        assert!(rendered.starts_with("[SWITCH] Switched to tarantool-ee 3.0.0\n"));
        assert!(rendered.contains("[WARN] no headers installed for tarantool-ee 3.0.0"));
    }

    #[test]
    fn switch_to_active_version_says_so() {
        let outcome = SwitchOutcome {
            program: Program::Tt,
            version: "2.0.0".to_string(),
            previous: Some("2.0.0".to_string()),
            headers: HeaderSwitch::NotShipped,
        };

        assert_eq!(
            render_switch(&outcome, false, false),
            "[OK] tt 2.0.0 is already active\n"
        );
    }
}
