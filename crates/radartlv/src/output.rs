use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use radartlv_frame::Frame;
use radartlv_publish::summarize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_frame(frame: &Frame, format: OutputFormat) {
    let summary = summarize(frame);
    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(frame).unwrap_or_default();
            if let Some(object) = value.as_object_mut() {
                object.insert("point_count".into(), frame.point_count().into());
                if let Some(summary) = &summary {
                    object.insert(
                        "summary".into(),
                        serde_json::to_value(summary).unwrap_or_default(),
                    );
                }
            }
            println!("{value}");
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SEQ", "POINTS", "CENTROID", "SPREAD"])
                .add_row(vec![
                    frame.sequence.to_string(),
                    frame.point_count().to_string(),
                    triple(summary.as_ref().map(|s| s.centroid)),
                    triple(summary.as_ref().map(|s| s.spread)),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "frame={} points={} centroid={} spread={}",
                frame.sequence,
                frame.point_count(),
                triple(summary.as_ref().map(|s| s.centroid)),
                triple(summary.as_ref().map(|s| s.spread)),
            );
        }
    }
}

fn triple(axes: Option<[f32; 3]>) -> String {
    match axes {
        Some([x, y, z]) => format!("({x:.3}, {y:.3}, {z:.3})"),
        None => "-".to_string(),
    }
}
