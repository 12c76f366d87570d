//! Header metadata export: flat key/value extraction and JSON sidecars.
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::volume::VolumeHeader;

/// Extract all metadata fields from a volume header into a HashMap
pub fn extract_metadata_fields(header: &VolumeHeader) -> HashMap<String, String> {
    let mut metadata = HashMap::new();

    metadata.insert("FORMAT".to_string(), header.format.to_string());
    metadata.insert("WIDTH".to_string(), header.width.to_string());
    metadata.insert("HEIGHT".to_string(), header.height.to_string());
    metadata.insert("DEPTH".to_string(), header.depth.to_string());
    metadata.insert("NFRAMES".to_string(), header.nframes.to_string());
    metadata.insert("VOXEL_TYPE".to_string(), header.voxel_type.to_string());
    metadata.insert("VOXEL_SIZE_X_MM".to_string(), header.xsize.to_string());
    metadata.insert("VOXEL_SIZE_Y_MM".to_string(), header.ysize.to_string());
    metadata.insert("VOXEL_SIZE_Z_MM".to_string(), header.zsize.to_string());
    metadata.insert("FOV_MM".to_string(), format!("{:.2}", header.fov()));
    metadata.insert(
        "RAS_GOOD".to_string(),
        if header.ras_good { "1" } else { "0" }.to_string(),
    );
    if header.ras_good {
        for (key, axis) in [
            ("X_RAS", header.x_ras),
            ("Y_RAS", header.y_ras),
            ("Z_RAS", header.z_ras),
            ("C_RAS", header.c_ras),
        ] {
            metadata.insert(
                key.to_string(),
                format!("{} {} {}", axis[0], axis[1], axis[2]),
            );
        }
    }
    if let Some(tr) = header.tr {
        metadata.insert("TR_MS".to_string(), tr.to_string());
    }
    if let Some(te) = header.te {
        metadata.insert("TE_MS".to_string(), te.to_string());
    }
    if let Some(ti) = header.ti {
        metadata.insert("TI_MS".to_string(), ti.to_string());
    }
    if let Some(flip) = header.flip_angle {
        metadata.insert("FLIP_ANGLE_DEG".to_string(), flip.to_string());
    }

    metadata
}

/// Write a `.json` sidecar next to `output_path` with the header fields
/// plus conversion provenance. Returns the sidecar path.
pub fn create_json_metadata_sidecar(output_path: &Path, header: &VolumeHeader) -> Result<PathBuf> {
    let mut metadata = extract_metadata_fields(header);
    metadata.insert("CONVERSION_TOOL".to_string(), "mrikit".to_string());
    metadata.insert(
        "CONVERSION_VERSION".to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    metadata.insert(
        "CONVERSION_TIMESTAMP".to_string(),
        chrono::Utc::now().to_rfc3339(),
    );

    let sidecar_path = output_path.with_extension("json");
    let json = serde_json::to_string_pretty(&metadata)?;
    fs::write(&sidecar_path, json)?;
    info!("Created metadata sidecar: {:?}", sidecar_path);
    Ok(sidecar_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileFormat, VoxelType};

    fn header() -> VolumeHeader {
        let mut h = VolumeHeader::new(FileFormat::Mgh, (64, 64, 32), 1, VoxelType::Float);
        h.ras_good = true;
        h.tr = Some(2000.0);
        h
    }

    #[test]
    fn fields_cover_geometry_and_scalars() {
        let fields = extract_metadata_fields(&header());
        assert_eq!(fields["FORMAT"], "MGH");
        assert_eq!(fields["WIDTH"], "64");
        assert_eq!(fields["VOXEL_TYPE"], "float");
        assert_eq!(fields["TR_MS"], "2000");
        assert!(fields.contains_key("X_RAS"));
        assert!(!fields.contains_key("TE_MS"));
    }

    #[test]
    fn sidecar_lands_next_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("vol.mgz");
        let sidecar = create_json_metadata_sidecar(&out, &header()).unwrap();
        assert_eq!(sidecar, dir.path().join("vol.json"));
        let parsed: HashMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&sidecar).unwrap()).unwrap();
        assert_eq!(parsed["CONVERSION_TOOL"], "mrikit");
        assert!(parsed.contains_key("CONVERSION_TIMESTAMP"));
    }
}
