//! Excel export functionality

use std::path::Path;

use loadboard_domain::{Dataset, RouteCounts};
use loadboard_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::report::LoadingReport;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a report and its rows to an Excel file
pub fn export_to_excel(report: &LoadingReport, dataset: &Dataset, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let goals_sheet = workbook.add_worksheet();
    write_goals_sheet(goals_sheet, report)?;

    let routes_sheet = workbook.add_worksheet();
    write_routes_sheet(routes_sheet, dataset)?;

    workbook.save(output_path).map_err(excel_err)?;

    Ok(())
}

fn write_counts(sheet: &mut Worksheet, row: u32, col: u16, counts: &RouteCounts) -> Result<()> {
    let values = [
        counts.total_routes as f64,
        counts.loaded as f64,
        counts.not_loaded as f64,
        counts.unset as f64,
        counts.remaining as f64,
        counts.processed as f64,
        counts.percent_loaded,
        counts.quantity_shipped as f64,
    ];
    for (offset, value) in values.iter().enumerate() {
        sheet
            .write_number(row, col + offset as u16, *value)
            .map_err(excel_err)?;
    }
    Ok(())
}

const COUNT_HEADERS: [&str; 8] = [
    "Total routes",
    "Loaded",
    "Not loaded",
    "Unset",
    "Remaining",
    "Processed",
    "Loaded %",
    "Packages shipped",
];

fn write_summary_sheet(sheet: &mut Worksheet, report: &LoadingReport) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, &report.title, &header_format)
        .map_err(excel_err)?;
    sheet.write_string(2, 0, "Loading date:").map_err(excel_err)?;
    sheet
        .write_string(2, 1, &report.reference_date)
        .map_err(excel_err)?;
    sheet.write_string(3, 0, "Profile:").map_err(excel_err)?;
    sheet.write_string(3, 1, &report.profile).map_err(excel_err)?;

    sheet
        .write_string_with_format(5, 0, "Scope", &header_format)
        .map_err(excel_err)?;
    for (col, header) in COUNT_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(5, col as u16 + 1, *header, &header_format)
            .map_err(excel_err)?;
    }

    sheet.write_string(6, 0, "All").map_err(excel_err)?;
    write_counts(sheet, 6, 1, &report.metrics.counts)?;

    let mut row = 7;
    for window in &report.metrics.windows {
        sheet.write_string(row, 0, &window.name).map_err(excel_err)?;
        write_counts(sheet, row, 1, &window.counts)?;
        row += 1;
    }

    if !report.warnings.is_empty() {
        row += 1;
        sheet
            .write_string_with_format(row, 0, "Warnings", &header_format)
            .map_err(excel_err)?;
        for warning in &report.warnings {
            row += 1;
            sheet
                .write_string(row, 0, &warning.to_string())
                .map_err(excel_err)?;
        }
    }

    sheet.set_column_width(0, 24).map_err(excel_err)?;

    Ok(())
}

fn write_goals_sheet(sheet: &mut Worksheet, report: &LoadingReport) -> Result<()> {
    sheet.set_name("Goals").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let headers = [
        "Goal", "Baseline", "Routes", "Target", "Required", "Loaded", "Shortfall", "Progress %",
        "Met",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (idx, goal) in report.goals.iter().enumerate() {
        let row = (idx + 1) as u32;
        let result = &goal.result;
        sheet.write_string(row, 0, &goal.name).map_err(excel_err)?;
        sheet
            .write_string(row, 1, &goal.baseline_kind.to_string())
            .map_err(excel_err)?;
        sheet
            .write_number(row, 2, result.baseline as f64)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 3, result.fraction)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 4, result.required as f64)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 5, result.achieved as f64)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 6, result.shortfall as f64)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 7, result.progress_percent)
            .map_err(excel_err)?;
        sheet
            .write_boolean(row, 8, result.goal_met)
            .map_err(excel_err)?;
    }

    sheet.set_column_width(0, 20).map_err(excel_err)?;

    Ok(())
}

fn write_routes_sheet(sheet: &mut Worksheet, dataset: &Dataset) -> Result<()> {
    sheet.set_name("Routes").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let headers = ["Sheet row", "Cage", "OpsClock", "Marker", "Status", "Packages"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (idx, route) in dataset.rows().iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_number(row, 0, route.source_row as f64)
            .map_err(excel_err)?;
        sheet.write_string(row, 1, &route.cage_id).map_err(excel_err)?;
        sheet.write_string(row, 2, &route.ops_clock).map_err(excel_err)?;
        sheet
            .write_string(row, 3, &route.status_marker)
            .map_err(excel_err)?;
        sheet
            .write_string(row, 4, route.status.label())
            .map_err(excel_err)?;
        sheet
            .write_number(row, 5, route.quantity.coerced() as f64)
            .map_err(excel_err)?;
    }

    sheet.set_column_width(1, 14).map_err(excel_err)?;
    sheet.set_column_width(2, 14).map_err(excel_err)?;

    Ok(())
}
