use anyhow::{Context, Result};
use mpd_algorithms::{
    mpd::{MpdAdvisory, MpdReport},
    profile_statistics::ProfileResult,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_DELIMITER: &str = ";";
pub const DEFAULT_PRECISION: usize = 6;

const HEADER: [&str; 5] = ["Perfil_N", "Pico_1", "Pico_2", "Media_Z_Perfil", "MPD_Perfil"];
const HEADER_DETREND: [&str; 5] = [
    "Perfil_N",
    "Pico_1_detrend",
    "Pico_2_detrend",
    "Media_Z_detrend",
    "MPD_Perfil",
];
const NO_VALID_PROFILE: &str = "Nenhum perfil válido encontrado com os parâmetros atuais.";
const NO_POINTS_IN_RADIUS: &str = "Nenhum ponto de dados encontrado dentro do raio especificado.";
const FINAL_RESULT: &str = "--- RESULTADO FINAL ---";
const FINAL_MPD: &str = "MPD Final";
const FINAL_MPD_DETREND: &str = "MPD Final (com detrend)";

/// Writes an [MpdReport] as delimited text: a header line, one row per valid profile and a final section with
/// the final MPD. If the report carries an advisory, the final section is replaced by a notice naming it.
pub struct ReportWriter<W: Write> {
    writer: W,
    delimiter: String,
    precision: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn from_write(write: W) -> Self {
        Self {
            writer: write,
            delimiter: DEFAULT_DELIMITER.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets the column delimiter. Default is `;`
    pub fn set_delimiter(&mut self, delimiter: &str) {
        self.delimiter = delimiter.to_string();
    }

    /// Sets the number of decimal places of all values. Default is 6
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
    }

    pub fn write(&mut self, report: &MpdReport) -> Result<()> {
        let detrend = report.parameters().detrend.is_enabled();
        let header = if detrend { &HEADER_DETREND } else { &HEADER };
        writeln!(self.writer, "{}", header.join(self.delimiter.as_str()))?;

        for row in report.rows() {
            self.write_row(row)?;
        }

        match report.advisory() {
            Some(MpdAdvisory::NoPointsInRadius) => {
                write!(self.writer, "\n{}\n", NO_POINTS_IN_RADIUS)?
            }
            Some(MpdAdvisory::NoValidProfiles) => write!(self.writer, "\n{}\n", NO_VALID_PROFILE)?,
            None => {
                let label = if detrend { FINAL_MPD_DETREND } else { FINAL_MPD };
                write!(self.writer, "\n\n{}\n", FINAL_RESULT)?;
                writeln!(
                    self.writer,
                    "{}{}{:.*}",
                    label,
                    self.delimiter,
                    self.precision,
                    report.final_mpd()
                )?;
            }
        }
        Ok(())
    }

    fn write_row(&mut self, row: &ProfileResult) -> Result<()> {
        let precision = self.precision;
        let values = [row.peak1, row.peak2, row.mean, row.mpd]
            .iter()
            .map(|value| format!("{:.*}", precision, value))
            .collect::<Vec<_>>();
        writeln!(
            self.writer,
            "{}{}{}",
            row.index,
            self.delimiter,
            values.join(self.delimiter.as_str())
        )?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}

impl ReportWriter<BufWriter<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).with_context(|| {
            format!(
                "Could not open report file {} for writing",
                path.as_ref().display()
            )
        })?;
        Ok(Self::from_write(BufWriter::new(file)))
    }
}

/// Writes `report` to the file at `path` with the default delimiter and precision. The file is flushed and closed
/// before this function returns
pub fn write_report<P: AsRef<Path>>(path: P, report: &MpdReport) -> Result<()> {
    let mut writer = ReportWriter::from_path(path.as_ref())?;
    writer
        .write(report)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write report file {}", path.as_ref().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpd_algorithms::profile_statistics::ProfileOutcome;
    use mpd_core::{
        config::{DetrendMode, MpdParameters},
        nalgebra::Point2,
    };

    fn result(index: usize, peak1: f64, peak2: f64, mean: f64) -> ProfileOutcome {
        ProfileOutcome::Computed(ProfileResult {
            index,
            peak1,
            peak2,
            mean,
            mpd: (peak1 + peak2) / 2.0 - mean,
        })
    }

    fn write_to_string(
        report: &MpdReport,
        configure: impl Fn(&mut ReportWriter<Vec<u8>>),
    ) -> Result<String> {
        let mut writer = ReportWriter::from_write(Vec::new());
        configure(&mut writer);
        writer.write(report)?;
        Ok(String::from_utf8(writer.into_inner()?)?)
    }

    fn sample_report(detrend: DetrendMode) -> MpdReport {
        MpdReport::new(
            MpdParameters::default().with_detrend(detrend),
            Point2::new(0.0, 0.0),
            42,
            vec![
                result(1, 2.0, 0.0, 1.0),
                ProfileOutcome::SkippedTooFewPoints,
                result(3, 0.5, 0.25, 0.125),
            ],
        )
    }

    #[test]
    fn test_write_report() -> Result<()> {
        let text = write_to_string(&sample_report(DetrendMode::None), |_| {})?;
        assert_eq!(
            text,
            "Perfil_N;Pico_1;Pico_2;Media_Z_Perfil;MPD_Perfil\n\
             1;2.000000;0.000000;1.000000;0.000000\n\
             3;0.500000;0.250000;0.125000;0.250000\n\
             \n\
             \n\
             --- RESULTADO FINAL ---\n\
             MPD Final;0.125000\n"
        );
        Ok(())
    }

    #[test]
    fn test_write_detrend_report() -> Result<()> {
        let text = write_to_string(&sample_report(DetrendMode::Linear), |_| {})?;
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "Perfil_N;Pico_1_detrend;Pico_2_detrend;Media_Z_detrend;MPD_Perfil"
        );
        assert_eq!(lines.last().copied(), Some("MPD Final (com detrend);0.125000"));
        Ok(())
    }

    #[test]
    fn test_write_report_without_valid_profiles() -> Result<()> {
        let report = MpdReport::new(
            MpdParameters::default(),
            Point2::new(0.0, 0.0),
            3,
            vec![ProfileOutcome::SkippedEmptyHalf],
        );
        assert_eq!(report.advisory(), Some(MpdAdvisory::NoValidProfiles));
        let text = write_to_string(&report, |_| {})?;
        assert_eq!(
            text,
            "Perfil_N;Pico_1;Pico_2;Media_Z_Perfil;MPD_Perfil\n\
             \n\
             Nenhum perfil válido encontrado com os parâmetros atuais.\n"
        );
        Ok(())
    }

    #[test]
    fn test_write_report_without_points_in_radius() -> Result<()> {
        let report =
            MpdReport::no_points_in_radius(MpdParameters::default(), Point2::new(1.0, 1.0));
        let text = write_to_string(&report, |_| {})?;
        assert_eq!(
            text,
            "Perfil_N;Pico_1;Pico_2;Media_Z_Perfil;MPD_Perfil\n\
             \n\
             Nenhum ponto de dados encontrado dentro do raio especificado.\n"
        );
        Ok(())
    }

    #[test]
    fn test_custom_delimiter_and_precision() -> Result<()> {
        let text = write_to_string(&sample_report(DetrendMode::None), |writer| {
            writer.set_delimiter(",");
            writer.set_precision(3);
        })?;
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Perfil_N,Pico_1,Pico_2,Media_Z_Perfil,MPD_Perfil");
        assert_eq!(lines[1], "1,2.000,0.000,1.000,0.000");
        assert_eq!(lines.last().copied(), Some("MPD Final,0.125"));
        Ok(())
    }
}
