use std::{fs::File, io::Write, path::Path};

use neander::mem::{DATA_LEN, IMAGE_LEN, MAGIC};

use crate::error::Error;

/// A complete `.mem` file: magic header followed by the zero padded cell area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image(Vec<u8>);

impl Image {
    pub fn new(output: &[u8]) -> Result<Self, Error> {
        if output.len() > DATA_LEN {
            return Err(Error::ImageOverflow(output.len()));
        }
        let mut bytes = Vec::with_capacity(IMAGE_LEN);
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(output);
        bytes.resize(IMAGE_LEN, 0x00);
        Ok(Image(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let mut file = File::create(path)
            .map_err(|e| Error::FileCreate(path.display().to_string(), e))?;
        file.write_all(&self.0)
            .map_err(|e| Error::FileWrite(path.display().to_string(), e))?;
        log::debug!("wrote {} bytes to {}", self.0.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_padding() {
        let image = Image::new(&[0x20, 0x00, 0x80, 0x00]).unwrap();
        let bytes = image.as_bytes();
        assert_eq!(bytes.len(), 516);
        assert_eq!(&bytes[..4], &[0x03, 0x4E, 0x44, 0x52]);
        assert_eq!(&bytes[4..8], &[0x20, 0x00, 0x80, 0x00]);
        assert!(bytes[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn empty_output() {
        let image = Image::new(&[]).unwrap();
        assert_eq!(image.as_bytes().len(), 516);
        assert!(image.as_bytes()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn full_memory() {
        let output = vec![0xAA; 512];
        let image = Image::new(&output).unwrap();
        assert_eq!(image.as_bytes().len(), 516);
        assert_eq!(image.as_bytes()[515], 0xAA);
    }

    #[test]
    fn overflow() {
        let output = vec![0x00; 514];
        assert!(matches!(Image::new(&output), Err(Error::ImageOverflow(514))));
    }

    #[test]
    fn write_file() {
        let path = std::env::temp_dir().join(format!("ndrasm-image-{}.mem", std::process::id()));
        let image = Image::new(&[0xF0, 0x00]).unwrap();
        image.write(&path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, image.as_bytes());
    }

    #[test]
    fn write_into_missing_dir() {
        let path = std::env::temp_dir()
            .join("ndrasm-no-such-dir")
            .join("output.mem");
        let image = Image::new(&[]).unwrap();
        assert!(matches!(image.write(&path), Err(Error::FileCreate(..))));
    }
}
