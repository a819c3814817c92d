use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Stages in the order they are compiled.
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    pub fn source_name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "shader.vert",
            ShaderStage::Fragment => "shader.frag",
        }
    }

    pub fn output_name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert.spv",
            ShaderStage::Fragment => "frag.spv",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_compiled_first() {
        assert_eq!(ShaderStage::ALL, [ShaderStage::Vertex, ShaderStage::Fragment]);
    }

    #[test]
    fn file_names_are_fixed() {
        assert_eq!(ShaderStage::Vertex.source_name(), "shader.vert");
        assert_eq!(ShaderStage::Vertex.output_name(), "vert.spv");
        assert_eq!(ShaderStage::Fragment.source_name(), "shader.frag");
        assert_eq!(ShaderStage::Fragment.output_name(), "frag.spv");
    }
}
