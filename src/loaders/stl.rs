use std::io::{Cursor, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use glam::Vec3;

use crate::core::triangle_intersection::Triangle;

const HEADER_LEN: usize = 80;
const RECORD_LEN: usize = 50;

pub fn load_stl_triangles(path: impl AsRef<Path>) -> Result<Vec<Triangle>> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read STL file: {:?}", path))?;
    parse_stl(&bytes).with_context(|| format!("Failed to parse STL file: {:?}", path))
}

/// Binary when the triangle count in the header matches the file size, ASCII otherwise
pub fn parse_stl(bytes: &[u8]) -> Result<Vec<Triangle>> {
    if is_binary(bytes) {
        parse_binary(bytes)
    } else {
        parse_ascii(std::str::from_utf8(bytes).context("STL is neither binary nor UTF-8 text")?)
    }
}

fn is_binary(bytes: &[u8]) -> bool {
    if bytes.len() < HEADER_LEN + 4 {
        return false;
    }
    let count = u32::from_le_bytes([
        bytes[HEADER_LEN],
        bytes[HEADER_LEN + 1],
        bytes[HEADER_LEN + 2],
        bytes[HEADER_LEN + 3],
    ]) as usize;
    count
        .checked_mul(RECORD_LEN)
        .and_then(|body| body.checked_add(HEADER_LEN + 4))
        == Some(bytes.len())
}

fn parse_binary(bytes: &[u8]) -> Result<Vec<Triangle>> {
    let mut cursor = Cursor::new(&bytes[HEADER_LEN..]);
    let count = cursor.read_u32::<LittleEndian>()? as usize;

    let mut triangles = Vec::with_capacity(count);
    for _ in 0..count {
        // Stored facet normals are ignored, winding is authoritative
        read_vec3(&mut cursor)?;
        triangles.push([
            read_vec3(&mut cursor)?,
            read_vec3(&mut cursor)?,
            read_vec3(&mut cursor)?,
        ]);
        cursor.read_u16::<LittleEndian>()?;
    }
    Ok(triangles)
}

fn read_vec3(reader: &mut impl Read) -> Result<Vec3> {
    Ok(Vec3::new(
        reader.read_f32::<LittleEndian>()?,
        reader.read_f32::<LittleEndian>()?,
        reader.read_f32::<LittleEndian>()?,
    ))
}

fn parse_ascii(text: &str) -> Result<Vec<Triangle>> {
    let mut triangles = Vec::new();
    let mut corners = Vec::with_capacity(3);

    for (line_no, line) in text.lines().enumerate() {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("vertex") => {
                let coords: Vec<f32> = words
                    .map(str::parse::<f32>)
                    .collect::<std::result::Result<_, _>>()
                    .with_context(|| format!("Bad vertex on line {}", line_no + 1))?;
                if coords.len() != 3 {
                    bail!("Vertex on line {} has {} coordinates", line_no + 1, coords.len());
                }
                corners.push(Vec3::new(coords[0], coords[1], coords[2]));
            }
            Some("endfacet") => {
                if corners.len() != 3 {
                    bail!("Facet ending on line {} has {} vertices", line_no + 1, corners.len());
                }
                triangles.push([corners[0], corners[1], corners[2]]);
                corners.clear();
            }
            _ => {}
        }
    }

    if triangles.is_empty() && !text.trim_start().starts_with("solid") {
        bail!("Not an STL file");
    }
    Ok(triangles)
}
