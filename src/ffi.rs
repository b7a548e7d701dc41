//! FFI bindings for stress-detect
//!
//! This module provides C-compatible functions so a desktop or web shell can
//! call the scorer. All functions use C strings (null-terminated) and return
//! allocated memory that must be freed by the caller using `sd_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::error::DetectError;
use crate::pipeline::{assess_json, classify_json, presets_json, random_scenario_json};

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Hand a pipeline result to the caller, recording the error on failure
fn into_c_result(result: Result<String, DetectError>) -> *mut c_char {
    match result {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Classification API
// ============================================================================

/// Classify a JSON reading and return the classification result JSON.
///
/// # Safety
/// - `reading_json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `sd_free_string`.
/// - Returns NULL on error; call `sd_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn sd_classify(reading_json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(reading_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid reading string pointer");
            return ptr::null_mut();
        }
    };

    into_c_result(classify_json(json_str))
}

/// Classify a JSON reading and return a full assessment payload JSON.
///
/// # Safety
/// - `reading_json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `sd_free_string`.
/// - Returns NULL on error; call `sd_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn sd_assess(reading_json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(reading_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid reading string pointer");
            return ptr::null_mut();
        }
    };

    into_c_result(assess_json(json_str))
}

/// Run a random preset scenario and return its assessment payload JSON.
///
/// # Safety
/// - Returns a newly allocated string that must be freed with `sd_free_string`.
/// - Returns NULL on error; call `sd_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn sd_random_scenario() -> *mut c_char {
    clear_last_error();
    into_c_result(random_scenario_json())
}

/// Return the nine preset readings grouped by level.
///
/// # Safety
/// - Returns a newly allocated string that must be freed with `sd_free_string`.
/// - Returns NULL on error; call `sd_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn sd_presets() -> *mut c_char {
    clear_last_error();
    into_c_result(presets_json())
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by stress-detect functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by an `sd_` function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn sd_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next `sd_` call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn sd_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

// ============================================================================
// Version Information
// ============================================================================

/// Get the library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn sd_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reading() -> CString {
        CString::new(
            r#"{
                "heartRate": 110,
                "skinConductance": 21,
                "sleepHours": 5.0,
                "bloodOxygen": 93,
                "respirationRate": 22,
                "physicalActivity": 15
            }"#,
        )
        .unwrap()
    }

    unsafe fn take_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = CStr::from_ptr(ptr).to_str().unwrap().to_string();
        sd_free_string(ptr);
        s
    }

    #[test]
    fn test_ffi_classify() {
        unsafe {
            let reading = sample_reading();
            let result = take_string(sd_classify(reading.as_ptr()));
            let value: serde_json::Value = serde_json::from_str(&result).unwrap();

            assert_eq!(value["level"], "high");
            assert_eq!(value["score"], 100);
            assert_eq!(value["confidence"], 80.0);
            assert!(sd_last_error().is_null());
        }
    }

    #[test]
    fn test_ffi_assess() {
        unsafe {
            let reading = sample_reading();
            let result = take_string(sd_assess(reading.as_ptr()));
            let value: serde_json::Value = serde_json::from_str(&result).unwrap();

            assert_eq!(value["origin"]["kind"], "manual");
            assert_eq!(value["result"]["probabilities"]["high"], 100.0);
        }
    }

    #[test]
    fn test_ffi_scenario_and_presets() {
        unsafe {
            let run = take_string(sd_random_scenario());
            let value: serde_json::Value = serde_json::from_str(&run).unwrap();
            assert_eq!(value["origin"]["kind"], "preset");

            let presets = take_string(sd_presets());
            let value: serde_json::Value = serde_json::from_str(&presets).unwrap();
            assert_eq!(value["moderate"].as_array().unwrap().len(), 3);
        }
    }

    #[test]
    fn test_ffi_null_pointer() {
        unsafe {
            let result = sd_classify(ptr::null());
            assert!(result.is_null());

            let error = sd_last_error();
            assert!(!error.is_null());
            let msg = CStr::from_ptr(error).to_str().unwrap();
            assert_eq!(msg, "Invalid reading string pointer");
        }
    }

    #[test]
    fn test_ffi_invalid_json() {
        unsafe {
            let bad = CString::new("{not json").unwrap();
            let result = sd_classify(bad.as_ptr());
            assert!(result.is_null());

            let msg = CStr::from_ptr(sd_last_error()).to_str().unwrap();
            assert!(msg.starts_with("Invalid JSON"));
        }
    }

    #[test]
    fn test_ffi_version() {
        unsafe {
            let version = CStr::from_ptr(sd_version()).to_str().unwrap();
            assert_eq!(version, env!("CARGO_PKG_VERSION"));
        }
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe {
            sd_free_string(ptr::null_mut());
        }
    }
}
