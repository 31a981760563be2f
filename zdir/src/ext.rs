use byteorder::{ReadBytesExt, LE};

pub(crate) trait ReadExt {
    fn read_u32_array<const N: usize>(&mut self) -> Result<[u32; N], super::Error>;
}

/// Attach a human readable context to any error convertible into [`super::Error`]
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T, super::Error>;
}

impl<R: std::io::Read> ReadExt for R {
    fn read_u32_array<const N: usize>(&mut self) -> Result<[u32; N], super::Error> {
        let mut buf = [0; N];
        self.read_u32_into::<LE>(&mut buf)?;
        Ok(buf)
    }
}

impl<T, E: Into<super::Error>> ResultExt<T> for Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T, super::Error> {
        self.map_err(|err| super::Error::Context {
            context: context.into(),
            source: Box::new(err.into()),
        })
    }
}
