use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("keysym.rs");
    let mut f = File::create(&dest_path).unwrap();

    // Generate the Keysym newtype wrapper
    writeln!(
        f,
        r#"
/// Represents a single X11 keyboard symbol.
///
/// This is a newtype wrapper around u32 for type safety.
/// The numeric values match X11 keysymdef.h definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Keysym(pub u32);

impl Keysym {{
    /// Get the canonical name of this keysym, if it has one
    pub fn name(self) -> Option<Cow<'static, str>> {{
        keysym_name(self.0)
    }}
}}

impl From<u32> for Keysym {{
    fn from(value: u32) -> Self {{
        Keysym(value)
    }}
}}

impl fmt::Display for Keysym {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        match self.name() {{
            Some(name) => write!(f, "{{}}", name),
            None => write!(f, "0x{{:x}}", self.0),
        }}
    }}
}}
"#
    )
    .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
