// crates/zprec-cli/src/io/html.rs

use std::fmt::Write;

use zprec_core::analysis::RangeCoverage;
use zprec_core::PrecisionSample;

pub struct FarPlaneRow {
    pub far: f64,
    pub coverage: RangeCoverage,
    pub crossovers: Vec<f64>,
}

pub struct ReportData {
    pub study_id: String,
    pub near: f64,
    pub ssao_range: f64,
    pub log_samples: usize,
    pub normalized_crossovers: Vec<f64>,
    pub key_depths: Vec<PrecisionSample>,
    pub planes: Vec<FarPlaneRow>,
}

const STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; max-width: 1200px; margin: 0 auto; padding: 20px; }
h1, h2 { color: #2c3e50; }
table { border-collapse: collapse; width: 100%; margin: 20px 0; }
th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }
th { background-color: #f2f2f2; }
.highlight { background-color: #ffffcc; }
.muted { color: #777; }";

// write! into a String is infallible.
pub fn render_report(d: &ReportData) -> String {
    let mut s = String::with_capacity(8 * 1024);

    s.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    s.push_str("<title>R16F vs R16Unorm Depth Format Analysis</title>\n");
    let _ = writeln!(s, "<style>\n{STYLE}\n</style>");
    s.push_str("</head>\n<body>\n");
    s.push_str("<h1>R16F vs R16Unorm Depth Format Precision Analysis</h1>\n");
    let _ = writeln!(s, "<p class=\"muted\">study_id {}</p>", d.study_id);

    s.push_str("<h2>Key Findings</h2>\n<ul>\n");
    match d.normalized_crossovers.as_slice() {
        [] => {
            let _ = writeln!(
                s,
                "<li>No precision crossover observed over {} normalized samples.</li>",
                d.log_samples
            );
        }
        xs => {
            for x in xs {
                let _ = writeln!(
                    s,
                    "<li><strong>Precision crossover at normalized depth {x:.4}</strong>: \
                     R16F is more precise below, R16Unorm above.</li>"
                );
            }
        }
    }
    for p in &d.planes {
        let _ = writeln!(
            s,
            "<li>Far plane {}m: R16F better in {:.1}% of the 0-{}m range{}</li>",
            p.far,
            p.coverage.fp_percent(),
            d.ssao_range,
            match p.crossovers.first() {
                Some(z) => format!(", up to {z:.2}m"),
                None => String::new(),
            }
        );
    }
    s.push_str("</ul>\n");

    s.push_str("<h2>Numerical Comparisons</h2>\n<table>\n");
    s.push_str(
        "<tr><th>Depth Value</th><th>R16F Precision</th><th>R16Unorm Precision</th>\
         <th>Advantage Ratio</th><th>Better Format</th></tr>\n",
    );
    for r in &d.key_depths {
        let _ = writeln!(
            s,
            "<tr><td>{}</td><td>{:.10}</td><td>{:.10}</td><td>{:.2}</td><td>{}</td></tr>",
            r.depth,
            r.fp_step,
            r.unorm_step,
            r.ratio,
            r.better_format()
        );
    }
    s.push_str("</table>\n");

    let _ = writeln!(
        s,
        "<h2>SSAO-Relevant Depth Range (near {}m, 0-{}m)</h2>\n<table>",
        d.near, d.ssao_range
    );
    s.push_str(
        "<tr><th>Far Plane</th><th>R16F Better</th><th>R16Unorm Better</th>\
         <th>Precision Crossover</th></tr>\n",
    );
    for p in &d.planes {
        let crossover = if p.crossovers.is_empty() {
            "none".to_string()
        } else {
            p.crossovers
                .iter()
                .map(|z| format!("{z:.2}m"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let class = if p.coverage.total > 0 && p.coverage.unorm_better == 0 {
            " class=\"highlight\""
        } else {
            ""
        };
        let _ = writeln!(
            s,
            "<tr{}><td>{}m</td><td>{:.1}%</td><td>{:.1}%</td><td>{}</td></tr>",
            class,
            p.far,
            p.coverage.fp_percent(),
            p.coverage.unorm_percent(),
            crossover
        );
    }
    s.push_str("</table>\n</body>\n</html>\n");

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_planes_where_r16f_wins_everywhere() {
        let d = ReportData {
            study_id: "00".repeat(16),
            near: 0.1,
            ssao_range: 10.0,
            log_samples: 1000,
            normalized_crossovers: vec![],
            key_depths: vec![PrecisionSample::at(0.1)],
            planes: vec![FarPlaneRow {
                far: 1000.0,
                coverage: RangeCoverage { total: 10, fp_better: 10, unorm_better: 0 },
                crossovers: vec![30.303],
            }],
        };
        let page = render_report(&d);
        assert!(page.contains("<tr class=\"highlight\"><td>1000m</td><td>100.0%</td>"));
        assert!(page.contains("No precision crossover observed over 1000"));
        assert!(page.contains("<td>0.25</td><td>R16Unorm</td>"));
        assert!(page.ends_with("</html>\n"));
    }
}
