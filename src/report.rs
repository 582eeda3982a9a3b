//! Human readable diagnostic output.

use std::fmt;

use crate::format::MasterKeysFile;
use crate::verify::{CandidateCheck, Verification};

const RULE: &str = "------------";
const LABEL_WIDTH: usize = 26;

pub const MISMATCH_NOTE: &str =
    "If there is not a match, either the password is incorrect or the .dat file is corrupt";

/// Diagnostic report of a single password check.
pub struct Report<'a> {
    file: &'a MasterKeysFile<'a>,
    verification: &'a Verification,
    quiet: bool,
}

impl<'a> Report<'a> {
    pub fn new(file: &'a MasterKeysFile<'a>, verification: &'a Verification) -> Self {
        Self {
            file,
            verification,
            quiet: false,
        }
    }

    /// Skip the hex dumps, keeping candidate results and verdict.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn write_dumps(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file;

        dump(f, "File bytes", file.raw())?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "File parts according to docs:")?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$} {} (or {} in UTF-8) ({} bytes)",
            "Header:",
            hex::encode(file.header()),
            String::from_utf8_lossy(file.header()),
            file.header().len()
        )?;
        dump(f, "Salt", file.salt())?;
        dump(f, "HMAC", file.stored_tag())?;
        dump(f, "IV", file.iv())?;
        dump(f, "Encrypted key set", file.encrypted_key_set())?;
        writeln!(f, "{RULE}")?;

        dump(f, "Derived key", self.verification.derived_key().as_bytes())?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$} {}{} ({} bytes)",
            "IV & encrypted key set:",
            hex::encode(file.iv()),
            hex::encode(file.encrypted_key_set()),
            file.iv().len() + file.encrypted_key_set().len()
        )?;
        dump(f, "Last 128 bytes of file", file.last_128())?;
        writeln!(f)
    }

    fn write_anomalies(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.file.has_known_header() {
            writeln!(f, "Warning: header is not ARQ_ENCRYPTED_MASTER_KEYS")?;
        }
        match self.file.length_anomaly() {
            Some(anomaly) => writeln!(
                f,
                "(unclear which should match because the .dat file is {} bytes instead of the expected {} bytes)",
                anomaly.actual, anomaly.expected
            ),
            None => writeln!(
                f,
                "(the file has the documented length, so both ranges are the same bytes)"
            ),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.quiet {
            self.write_dumps(f)?;
        }

        writeln!(f, "**One of the below two values should match the HMAC above**")?;
        self.write_anomalies(f)?;
        writeln!(f)?;

        for check in self.verification.checks() {
            write_check(f, check)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", self.verification.verdict())?;
        writeln!(f)?;
        writeln!(f, "{MISMATCH_NOTE}")
    }
}

fn dump(f: &mut fmt::Formatter<'_>, label: &str, bytes: &[u8]) -> fmt::Result {
    writeln!(
        f,
        "{:<LABEL_WIDTH$} {} ({} bytes)",
        format!("{label}:"),
        hex::encode(bytes),
        bytes.len()
    )
}

fn write_check(f: &mut fmt::Formatter<'_>, check: &CandidateCheck) -> fmt::Result {
    let label = format!("Calculated HMAC of {}:", check.candidate().label());
    writeln!(
        f,
        "{label:<46} {} [{}]",
        hex::encode(check.tag()),
        if check.matches() { "match" } else { "no match" }
    )
}
