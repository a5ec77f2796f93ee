// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_TIME_FORMAT, naive_datetime_to_excel_serial};
use crate::export::model::{Cell, Sheet};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Width of a rendered date-time cell.
const DATE_TIME_WIDTH: usize = 19;

/// Export XLSX: one styled worksheet per table, auto column widths.
pub(crate) fn export_xlsx(sheets: &[Sheet], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name).map_err(to_export_error)?;
        write_sheet(worksheet, sheet)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = sheet
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, cells) in sheet.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in cells.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, band_color)?;

            let width = match cell {
                Cell::DateTime(_) => DATE_TIME_WIDTH,
                other => UnicodeWidthStr::width(other.display().as_str()),
            };
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(width);
            }
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    Ok(())
}

/// Writes a single banded cell according to its type.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<()> {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::DateTime(dt) => {
            let fmt = fmt.set_num_format(DATE_TIME_FORMAT);
            worksheet
                .write_with_format(row, col, naive_datetime_to_excel_serial(dt), &fmt)
                .map_err(to_export_error)?;
        }
        Cell::Number(n) => {
            let fmt = fmt.set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_export_error)?;
        }
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &fmt)
                .map_err(to_export_error)?;
        }
        Cell::Empty => {
            worksheet
                .write_blank(row, col, &fmt)
                .map_err(to_export_error)?;
        }
    }

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
