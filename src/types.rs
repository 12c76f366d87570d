//! Shared types and enums used across MRIKIT.
//! Includes `FileFormat`, `VoxelType`, and the dilation `Connectivity`.
use serde::{Deserialize, Serialize};

/// On-disk formats the classifier can report.
///
/// The first nine carry a fixed CLI label; `Nifti1` is recognized by the
/// classifier but has no label, so the CLI treats it as a positive but
/// unhandled file type.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum FileFormat {
    CoronalSliceDirectory,
    Genesis,
    GeLx,
    Mgh,
    Minc,
    Analyze,
    Siemens,
    Brik,
    Bshort,
    Nifti1,
}

impl FileFormat {
    /// The fixed label printed by `mri_head -identify`, if this format has one.
    pub fn cli_label(&self) -> Option<&'static str> {
        match self {
            FileFormat::CoronalSliceDirectory => Some("coronal slice directory"),
            FileFormat::Genesis => Some("genesis"),
            FileFormat::GeLx => Some("GE LX"),
            FileFormat::Mgh => Some("mgh"),
            FileFormat::Minc => Some("minc"),
            FileFormat::Analyze => Some("analyze"),
            FileFormat::Siemens => Some("siemens"),
            FileFormat::Brik => Some("brik"),
            FileFormat::Bshort => Some("bshort"),
            FileFormat::Nifti1 => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FileFormat::CoronalSliceDirectory => "coronal slice directory",
            FileFormat::Genesis => "GE Genesis",
            FileFormat::GeLx => "GE LX",
            FileFormat::Mgh => "MGH",
            FileFormat::Minc => "MINC",
            FileFormat::Analyze => "Analyze 7.5",
            FileFormat::Siemens => "Siemens IMA",
            FileFormat::Brik => "AFNI BRIK",
            FileFormat::Bshort => "bshort",
            FileFormat::Nifti1 => "NIfTI-1",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Voxel sample types carried by volume headers.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum VoxelType {
    UChar,
    Short,
    Int,
    Long,
    Float,
}

impl VoxelType {
    /// Decode the MGH header type word (uchar 0, int 1, long 2, float 3, short 4).
    pub fn from_mgh_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(VoxelType::UChar),
            1 => Some(VoxelType::Int),
            2 => Some(VoxelType::Long),
            3 => Some(VoxelType::Float),
            4 => Some(VoxelType::Short),
            _ => None,
        }
    }

    /// Decode the Analyze 7.5 datatype word (uchar 2, short 4, int 8, float 16).
    pub fn from_analyze_code(code: i16) -> Option<Self> {
        match code {
            2 => Some(VoxelType::UChar),
            4 => Some(VoxelType::Short),
            8 => Some(VoxelType::Int),
            16 => Some(VoxelType::Float),
            _ => None,
        }
    }

    pub fn bytes_per_voxel(&self) -> usize {
        match self {
            VoxelType::UChar => 1,
            VoxelType::Short => 2,
            VoxelType::Int | VoxelType::Long | VoxelType::Float => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VoxelType::UChar => "uchar",
            VoxelType::Short => "short",
            VoxelType::Int => "int",
            VoxelType::Long => "long",
            VoxelType::Float => "float",
        }
    }
}

impl std::fmt::Display for VoxelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Structuring-element choice for morphological dilation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Connectivity {
    /// Six face neighbors.
    Faces6,
    /// Full 3x3x3 neighborhood.
    Full26,
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Connectivity::Faces6 => write!(f, "Faces6"),
            Connectivity::Full26 => write!(f, "Full26"),
        }
    }
}
