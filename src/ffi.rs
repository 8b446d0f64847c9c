//! C ABI for embedding the engine in other runtimes.
//!
//! Every entry point accepts a NUL-terminated string or null; null and empty
//! strings produce the zero/neutral result. Input bytes that are not valid
//! UTF-8 are decoded lossily.
//!
//! Memory management follows these rules:
//! - `extractKeywords` returns a string owned by the caller, released with
//!   `freeKeywords`.
//! - `analyzeText` returns a record owned by the caller, released with
//!   `freeAnalysisResult`.
//! - Both return null only when the buffer cannot be allocated; the reason is
//!   then available from `textmetrics_last_error_message`.
//! - Release functions accept null.

use std::alloc::{self, Layout};
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::ptr;
use std::sync::Mutex;

use libc::{c_char, c_float, c_int};
use log::warn;

use crate::engine::{AnalysisResult, default_engine};
use crate::error::{Result, TextMetricsError};

/// Scalar metrics in C layout.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CAnalysisResult {
    pub word_count: c_int,
    pub sentiment: c_float,
    pub reading_time: c_int,
    pub complexity: c_float,
}

impl From<AnalysisResult> for CAnalysisResult {
    fn from(result: AnalysisResult) -> Self {
        CAnalysisResult {
            word_count: saturating_c_int(result.word_count),
            sentiment: result.sentiment,
            reading_time: saturating_c_int(result.reading_time),
            complexity: result.complexity,
        }
    }
}

fn saturating_c_int<T: TryInto<c_int>>(value: T) -> c_int {
    value.try_into().unwrap_or(c_int::MAX)
}

// --- Error Handling ---

static LAST_ERROR: Mutex<Option<CString>> = Mutex::new(None);

fn set_last_error(err: &TextMetricsError) {
    warn!("{err}");
    let Ok(msg) = CString::new(err.to_string()) else {
        return;
    };
    if let Ok(mut slot) = LAST_ERROR.lock() {
        *slot = Some(msg);
    }
}

/// Message of the last allocation failure, or null if there was none.
///
/// The message is shared by all threads. The returned pointer is invalidated
/// by the next failure on any thread, so it is not safe to read while other
/// threads may call into the library; copy it out immediately. Do not free it.
#[unsafe(no_mangle)]
pub extern "C" fn textmetrics_last_error_message() -> *const c_char {
    match LAST_ERROR.lock() {
        Ok(slot) => slot.as_ref().map_or(ptr::null(), |msg| msg.as_ptr()),
        Err(_) => ptr::null(),
    }
}

// --- Helpers ---

/// # Safety
///
/// `text` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn input_text<'a>(text: *const c_char) -> Option<Cow<'a, str>> {
    if text.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(text) }.to_string_lossy())
}

fn keywords_buffer(keywords: &[String]) -> Result<CString> {
    let separators = keywords.len().saturating_sub(1);
    let len = keywords.iter().map(String::len).sum::<usize>() + separators;

    let mut bytes = Vec::new();
    // One extra byte for the terminator CString appends
    bytes.try_reserve_exact(len + 1)?;
    for (i, keyword) in keywords.iter().enumerate() {
        if i > 0 {
            bytes.push(b',');
        }
        bytes.extend_from_slice(keyword.as_bytes());
    }

    Ok(CString::new(bytes)?)
}

fn result_buffer(result: CAnalysisResult) -> Result<*mut CAnalysisResult> {
    let layout = Layout::new::<CAnalysisResult>();
    let ptr = unsafe { alloc::alloc(layout) } as *mut CAnalysisResult;
    if ptr.is_null() {
        return Err(TextMetricsError::allocation(format!(
            "failed to allocate {} bytes for the analysis result",
            layout.size()
        )));
    }
    unsafe { ptr.write(result) };
    Ok(ptr)
}

// --- Metrics ---

/// Number of normalized words in `text`.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[unsafe(export_name = "getWordCount")]
pub unsafe extern "C" fn get_word_count(text: *const c_char) -> c_int {
    let text = unsafe { input_text(text) };
    saturating_c_int(default_engine().word_count(text.as_deref()))
}

/// Sentiment of `text` in `[-1.0, 1.0]`.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[unsafe(export_name = "getSentimentScore")]
pub unsafe extern "C" fn get_sentiment_score(text: *const c_char) -> c_float {
    let text = unsafe { input_text(text) };
    default_engine().sentiment_score(text.as_deref())
}

/// Up to `max_keywords` comma-separated keywords of `text`.
///
/// Returns an empty string when there are none or `max_keywords <= 0`, and
/// null only if the buffer cannot be allocated. A non-null result must be
/// released with `freeKeywords`.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[unsafe(export_name = "extractKeywords")]
pub unsafe extern "C" fn extract_keywords(text: *const c_char, max_keywords: c_int) -> *mut c_char {
    let text = unsafe { input_text(text) };
    let max_keywords = usize::try_from(max_keywords).unwrap_or(0);
    let keywords = default_engine().extract_keywords(text.as_deref(), max_keywords);

    match keywords_buffer(&keywords) {
        Ok(buffer) => buffer.into_raw(),
        Err(err) => {
            set_last_error(&err);
            ptr::null_mut()
        }
    }
}

/// Readability-based complexity of `text` in `[0.0, 1.0]`.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[unsafe(export_name = "getComplexity")]
pub unsafe extern "C" fn get_complexity(text: *const c_char) -> c_float {
    let text = unsafe { input_text(text) };
    default_engine().complexity(text.as_deref())
}

/// Reading time of `text` in whole minutes; `0` for null or empty text.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[unsafe(export_name = "getReadingTime")]
pub unsafe extern "C" fn get_reading_time(text: *const c_char) -> c_int {
    let text = unsafe { input_text(text) };
    saturating_c_int(default_engine().reading_time(text.as_deref()))
}

/// All four metrics of `text`.
///
/// Returns null only if the record cannot be allocated. A non-null result
/// must be released with `freeAnalysisResult`.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[unsafe(export_name = "analyzeText")]
pub unsafe extern "C" fn analyze_text(text: *const c_char) -> *mut CAnalysisResult {
    let text = unsafe { input_text(text) };
    let result = CAnalysisResult::from(default_engine().analyze(text.as_deref()));

    match result_buffer(result) {
        Ok(ptr) => ptr,
        Err(err) => {
            set_last_error(&err);
            ptr::null_mut()
        }
    }
}

// --- Release ---

/// Release a string returned by `extractKeywords`.
///
/// # Safety
///
/// `keywords` must be null or a pointer returned by `extractKeywords` that
/// has not been released yet.
#[unsafe(export_name = "freeKeywords")]
pub unsafe extern "C" fn free_keywords(keywords: *mut c_char) {
    if !keywords.is_null() {
        drop(unsafe { CString::from_raw(keywords) });
    }
}

/// Release a record returned by `analyzeText`.
///
/// # Safety
///
/// `result` must be null or a pointer returned by `analyzeText` that has not
/// been released yet.
#[unsafe(export_name = "freeAnalysisResult")]
pub unsafe extern "C" fn free_analysis_result(result: *mut CAnalysisResult) {
    if !result.is_null() {
        unsafe { alloc::dealloc(result as *mut u8, Layout::new::<CAnalysisResult>()) };
    }
}
