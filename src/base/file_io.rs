use super::{BcjError, BcjResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Creates the parent directories of a file and returns the displayed file name
fn prepare_output(path: &Path) -> BcjResult<String> {
    let file = path.display().to_string();
    if let Some(p) = path.parent() {
        fs::create_dir_all(p).map_err(|e| BcjError::io(&file, e))?;
    }
    Ok(file)
}

/// Reads the whole file into a string
///
/// Returns the displayed file name and the contents.
pub(crate) fn read_text<P>(full_path: &P) -> BcjResult<(String, String)>
where
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path);
    let file = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|e| BcjError::io(&file, e))?;
    Ok((file, text))
}

/// Writes a string to a file, creating the parent directories if needed
pub(crate) fn write_text<P>(full_path: &P, text: &str) -> BcjResult<()>
where
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path);
    let file = prepare_output(path)?;
    fs::write(path, text).map_err(|e| BcjError::io(&file, e))?;
    log::info!("file <{}> written", file);
    Ok(())
}

/// Reads a JSON file into a deserializable structure
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
pub(crate) fn read_json<T, P>(full_path: &P) -> BcjResult<T>
where
    T: DeserializeOwned,
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path);
    let file = path.display().to_string();
    let reader = BufReader::new(File::open(path).map_err(|e| BcjError::io(&file, e))?);
    let data = serde_json::from_reader(reader)?;
    Ok(data)
}

/// Writes a serializable structure to a JSON file
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
/// * `pretty` -- indents the output
pub(crate) fn write_json<T, P>(data: &T, full_path: &P, pretty: bool) -> BcjResult<()>
where
    T: Serialize,
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path);
    let file = prepare_output(path)?;
    let mut writer = File::create(path).map_err(|e| BcjError::io(&file, e))?;
    if pretty {
        serde_json::to_writer_pretty(&mut writer, data)?;
    } else {
        serde_json::to_writer(&mut writer, data)?;
    }
    log::info!("file <{}> written", file);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
