//! The format interpreter.
//!
//! A format string is validated against the arguments in full before any
//! input is touched. The second pass walks it again: literal text is matched
//! against the input and each field is handed to its scanner. Every piece
//! runs under its own checkpoint, so a failure leaves the cursor just past
//! the last piece that succeeded.

use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};

use crate::format::{FormatParser, Piece};
use crate::scanner::{ScanContext, ValueScanner};
use crate::{Arg, Cursor, Locale, ScanError};

/// Scanners and argument indices for every field, in format order.
type Plan = SmallVec<[(usize, ValueScanner); 8]>;

/// Checks `format` against `args` and configures a scanner per field.
///
/// Fields without an explicit index take the next argument in order. Every
/// argument must be bound by at least one field.
fn plan(format: &str, args: &[Arg<'_>]) -> Result<Plan, ScanError> {
    let mut plan = Plan::new();
    let mut bound: SmallVec<[bool; 8]> = smallvec![false; args.len()];
    let mut next_index = 0;
    for piece in FormatParser::new(format) {
        let Piece::Field(field) = piece? else { continue };
        let index = field.index.unwrap_or(next_index);
        next_index = index + 1;
        let arg = args.get(index).ok_or(ScanError::InvalidFormatString)?;
        let mut scanner = ValueScanner::for_arg(arg);
        scanner.parse(field.spec)?;
        plan.push((index, scanner));
        bound[index] = true;
    }
    if bound.contains(&false) {
        debug!(format, "format leaves an argument unbound");
        return Err(ScanError::InvalidFormatString);
    }
    Ok(plan)
}

/// Interprets `format` over `cursor`, writing scanned values into `args`.
///
/// # Errors
/// [`ScanError::InvalidFormatString`] before anything is read if the format
/// is malformed or does not fit `args`; otherwise the first scanning error.
pub fn vscan<C: Cursor + ?Sized>(
    cursor: &mut C,
    locale: &dyn Locale,
    format: &str,
    args: &mut [Arg<'_>],
) -> Result<(), ScanError> {
    let plan = plan(format, args)?;
    let mut fields = plan.iter();
    let mut ctx = ScanContext::new(cursor, locale);

    for piece in FormatParser::new(format) {
        let piece = piece?;
        ctx.cursor.set_checkpoint();
        let outcome = match piece {
            Piece::Literal(text) => {
                trace!(text, "matching literal");
                match_literal(&mut ctx, text)
            }
            Piece::Field(_) => {
                let Some(&(index, scanner)) = fields.next() else {
                    return Err(ScanError::InvalidFormatString);
                };
                trace!(index, ?scanner, "scanning field");
                scan_field(&mut ctx, &scanner, &mut args[index])
            }
        };
        commit(&mut ctx, outcome)?;
    }
    Ok(())
}

/// Scans one value per argument with default scanners, as if the format
/// were `"{} {} ..."`.
///
/// # Errors
/// The first scanning error.
pub fn vscan_default<C: Cursor + ?Sized>(
    cursor: &mut C,
    locale: &dyn Locale,
    args: &mut [Arg<'_>],
) -> Result<(), ScanError> {
    let mut ctx = ScanContext::new(cursor, locale);
    for (index, arg) in args.iter_mut().enumerate() {
        trace!(index, "scanning default field");
        if index > 0 {
            ctx.skip_whitespace()?;
        }
        scan_one(&mut ctx, arg)?;
    }
    Ok(())
}

/// Scans a single value with its default scanner under a fresh checkpoint.
pub(crate) fn scan_one<C: Cursor + ?Sized>(
    ctx: &mut ScanContext<'_, C>,
    arg: &mut Arg<'_>,
) -> Result<(), ScanError> {
    let scanner = ValueScanner::for_arg(arg);
    ctx.cursor.set_checkpoint();
    let outcome = scan_field(ctx, &scanner, arg);
    commit(ctx, outcome)
}

/// Keeps what a piece consumed on success, puts it all back on failure.
fn commit<C: Cursor + ?Sized>(
    ctx: &mut ScanContext<'_, C>,
    outcome: Result<(), ScanError>,
) -> Result<(), ScanError> {
    if let Err(err) = outcome {
        ctx.cursor.rollback();
        debug!(%err, position = ctx.cursor.position(), "piece failed, rolled back");
    }
    ctx.cursor.advance_past_checkpoint();
    outcome
}

fn scan_field<C: Cursor + ?Sized>(
    ctx: &mut ScanContext<'_, C>,
    scanner: &ValueScanner,
    arg: &mut Arg<'_>,
) -> Result<(), ScanError> {
    if scanner.skips_leading_whitespace() {
        ctx.skip_whitespace()?;
    }
    ctx.cursor.peek_char()?;
    scanner.scan(ctx, arg)
}

/// Whitespace in the format matches any run of input whitespace, including
/// none; any other character must match exactly.
fn match_literal<C: Cursor + ?Sized>(
    ctx: &mut ScanContext<'_, C>,
    text: &str,
) -> Result<(), ScanError> {
    let mut after_space = false;
    for expected in text.chars() {
        if ctx.is_space(expected) {
            if !after_space {
                ctx.skip_whitespace()?;
            }
            after_space = true;
            continue;
        }
        after_space = false;
        let ch = match ctx.cursor.read_char() {
            Ok(ch) => ch,
            Err(e) if e.is_eof() => return Err(ScanError::InvalidScannedValue),
            Err(e) => return Err(e),
        };
        if ch != expected {
            return Err(ScanError::InvalidScannedValue);
        }
    }
    Ok(())
}
