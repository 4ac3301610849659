use std::fmt;

use crate::error::Result;

/// A queue element owning one string value.
///
/// Elements are created by the queue's insertion operations and handed back
/// to the caller by the removal operations. Dropping an element releases it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    /// Copy `value` into a new element.
    ///
    /// The storage is reserved up front, so an allocation failure is reported
    /// as an error and nothing is left allocated.
    pub fn try_new(value: &str) -> Result<Self> {
        let mut owned = String::new();
        owned.try_reserve_exact(value.len())?;
        owned.push_str(value);
        Ok(Self { value: owned })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    /// Copy the value into a C-string style buffer.
    ///
    /// At most `buf.len() - 1` bytes are copied, the unused bytes are
    /// zeroed and the last byte is always a NUL terminator. An empty buffer
    /// is left alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Element;
    ///
    /// let element = Element::from("gerbil");
    /// let mut buf = [0xff_u8; 4];
    /// element.copy_to(&mut buf);
    /// assert_eq!(&buf, b"ger\0");
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) {
        if let Some((terminator, body)) = buf.split_last_mut() {
            let bytes = self.value.as_bytes();
            let copied = bytes.len().min(body.len());
            body[..copied].copy_from_slice(&bytes[..copied]);
            body[copied..].fill(0);
            *terminator = 0;
        }
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::Element;

    #[test]
    fn try_new_copies() {
        let source = String::from("dolphin");
        let element = Element::try_new(&source).unwrap();
        drop(source);
        assert_eq!(element.value(), "dolphin");
        assert_eq!(element.to_string(), "dolphin");
        assert_eq!(element.into_value(), "dolphin");
    }

    #[test]
    fn copy_to_truncates() {
        let element = Element::from("bear");

        let mut exact = [0xff_u8; 5];
        element.copy_to(&mut exact);
        assert_eq!(&exact, b"bear\0");

        let mut short = [0xff_u8; 3];
        element.copy_to(&mut short);
        assert_eq!(&short, b"be\0");

        let mut long = [0xff_u8; 8];
        element.copy_to(&mut long);
        assert_eq!(&long, b"bear\0\0\0\0");

        let mut single = [0xff_u8; 1];
        element.copy_to(&mut single);
        assert_eq!(&single, b"\0");

        let mut empty: [u8; 0] = [];
        element.copy_to(&mut empty);
    }

    #[test]
    fn ordering_is_bytewise() {
        assert!(Element::from("13") < Element::from("2"));
        assert!(Element::from("B") < Element::from("a"));
        assert_eq!(format!("{:?}", Element::from("x")), r#""x""#);
    }
}
