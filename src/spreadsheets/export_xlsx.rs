use crate::domain::listing::ListingRecord;
use crate::errors::ServerError;
use crate::spreadsheets::export_csv::CSV_HEADERS;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

/// Same rows and columns as the CSV export, as a single-sheet workbook.
pub fn export_listings_xlsx<'a, I>(listings: I, sheet_name: &str) -> Result<Vec<u8>, ServerError>
where
    I: IntoIterator<Item = &'a ListingRecord>,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| ServerError::XlsxError(format!("Failed to name sheet: {e}")))?;

    for (col, header) in CSV_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
        })?;
    }

    for (i, listing) in listings.into_iter().enumerate() {
        let r = (i + 1) as u32;
        write_row(worksheet, r, listing)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write row {r}: {e}")))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn write_row(ws: &mut Worksheet, r: u32, l: &ListingRecord) -> Result<(), XlsxError> {
    ws.write_string(r, 0, &l.id)?;
    ws.write_string(r, 1, &l.address)?;
    ws.write_string(r, 2, &l.zip_code)?;
    ws.write_number(r, 3, l.square_footage as f64)?;
    ws.write_number(r, 4, l.bedrooms as f64)?;
    ws.write_string(r, 5, &l.home_type)?;
    ws.write_number(r, 6, l.listed_price)?;
    ws.write_number(r, 7, l.zestimate)?;
    ws.write_number(r, 8, l.value_delta as f64)?;
    ws.write_string(r, 9, &l.last_updated)?;
    ws.write_number(r, 10, l.latitude)?;
    ws.write_number(r, 11, l.longitude)?;
    Ok(())
}
