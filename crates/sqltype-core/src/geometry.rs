//! Spatial value codecs.
//!
//! Application code hands spatial values around as GeoJSON. Dialects need
//! them as well-known text (WKT) when writing and receive well-known binary
//! (WKB, or PostGIS EWKB) when reading. `geo_types` is the pivot model.

use crate::error::{EncodeError, ParseError};
use crate::values::format_float;
use geo_types::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use serde_json::{json, Value as JsonValue};

// ---------------------------------------------------------------------------
// GeoJSON
// ---------------------------------------------------------------------------

/// Convert a GeoJSON geometry object into a geometry.
pub fn geojson_to_geometry(value: &JsonValue) -> Result<Geometry<f64>, EncodeError> {
    let kind = value
        .get("type")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| EncodeError::InvalidGeoJson("missing \"type\"".to_string()))?;

    if kind == "GeometryCollection" {
        let members = value
            .get("geometries")
            .and_then(JsonValue::as_array)
            .ok_or_else(|| EncodeError::InvalidGeoJson("missing \"geometries\"".to_string()))?;
        let geometries = members
            .iter()
            .map(geojson_to_geometry)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Geometry::GeometryCollection(GeometryCollection::new_from(
            geometries,
        )));
    }

    let coordinates = value
        .get("coordinates")
        .ok_or_else(|| EncodeError::InvalidGeoJson("missing \"coordinates\"".to_string()))?;

    let geometry = match kind {
        "Point" => Geometry::Point(Point::from(coord(coordinates)?)),
        "LineString" => Geometry::LineString(line_string(coordinates)?),
        "Polygon" => Geometry::Polygon(polygon(coordinates)?),
        "MultiPoint" => Geometry::MultiPoint(MultiPoint::new(
            list(coordinates)?
                .iter()
                .map(|c| coord(c).map(Point::from))
                .collect::<Result<_, _>>()?,
        )),
        "MultiLineString" => Geometry::MultiLineString(MultiLineString::new(
            list(coordinates)?
                .iter()
                .map(line_string)
                .collect::<Result<_, _>>()?,
        )),
        "MultiPolygon" => Geometry::MultiPolygon(MultiPolygon::new(
            list(coordinates)?
                .iter()
                .map(polygon)
                .collect::<Result<_, _>>()?,
        )),
        other => {
            return Err(EncodeError::InvalidGeoJson(format!(
                "unknown geometry type {other}"
            )))
        }
    };
    Ok(geometry)
}

fn list(value: &JsonValue) -> Result<&Vec<JsonValue>, EncodeError> {
    value
        .as_array()
        .ok_or_else(|| EncodeError::InvalidGeoJson(format!("expected an array, got {value}")))
}

fn coord(value: &JsonValue) -> Result<Coord<f64>, EncodeError> {
    let items = list(value)?;
    let axis = |i: usize| {
        items
            .get(i)
            .and_then(JsonValue::as_f64)
            .ok_or_else(|| EncodeError::InvalidGeoJson(format!("invalid position {value}")))
    };
    Ok(Coord {
        x: axis(0)?,
        y: axis(1)?,
    })
}

fn line_string(value: &JsonValue) -> Result<LineString<f64>, EncodeError> {
    Ok(LineString::new(
        list(value)?.iter().map(coord).collect::<Result<_, _>>()?,
    ))
}

fn polygon(value: &JsonValue) -> Result<Polygon<f64>, EncodeError> {
    let mut rings = list(value)?
        .iter()
        .map(line_string)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();
    let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
    Ok(Polygon::new(exterior, rings.collect()))
}

/// Convert a geometry into a GeoJSON geometry object.
pub fn geometry_to_geojson(geometry: &Geometry<f64>) -> JsonValue {
    match geometry {
        Geometry::Point(p) => json!({ "type": "Point", "coordinates": position(&p.0) }),
        Geometry::Line(l) => json!({
            "type": "LineString",
            "coordinates": [position(&l.start), position(&l.end)],
        }),
        Geometry::LineString(ls) => json!({ "type": "LineString", "coordinates": positions(ls) }),
        Geometry::Polygon(p) => json!({ "type": "Polygon", "coordinates": rings(p) }),
        Geometry::MultiPoint(mp) => json!({
            "type": "MultiPoint",
            "coordinates": mp.0.iter().map(|p| position(&p.0)).collect::<Vec<_>>(),
        }),
        Geometry::MultiLineString(mls) => json!({
            "type": "MultiLineString",
            "coordinates": mls.0.iter().map(positions).collect::<Vec<_>>(),
        }),
        Geometry::MultiPolygon(mp) => json!({
            "type": "MultiPolygon",
            "coordinates": mp.0.iter().map(rings).collect::<Vec<_>>(),
        }),
        Geometry::GeometryCollection(gc) => json!({
            "type": "GeometryCollection",
            "geometries": gc.0.iter().map(geometry_to_geojson).collect::<Vec<_>>(),
        }),
        Geometry::Rect(r) => geometry_to_geojson(&Geometry::Polygon(r.to_polygon())),
        Geometry::Triangle(t) => geometry_to_geojson(&Geometry::Polygon(t.to_polygon())),
    }
}

fn position(c: &Coord<f64>) -> JsonValue {
    json!([c.x, c.y])
}

fn positions(ls: &LineString<f64>) -> Vec<JsonValue> {
    ls.0.iter().map(position).collect()
}

fn rings(p: &Polygon<f64>) -> Vec<Vec<JsonValue>> {
    std::iter::once(p.exterior())
        .chain(p.interiors())
        .map(positions)
        .collect()
}

// ---------------------------------------------------------------------------
// WKT
// ---------------------------------------------------------------------------

/// Well-known text of a geometry, e.g. `POINT(1 2)`.
pub fn to_wkt(geometry: &Geometry<f64>) -> String {
    match geometry {
        Geometry::Point(p) => format!("POINT({})", wkt_coord(&p.0)),
        Geometry::Line(l) => format!(
            "LINESTRING({},{})",
            wkt_coord(&l.start),
            wkt_coord(&l.end)
        ),
        Geometry::LineString(ls) => tagged("LINESTRING", wkt_coords(ls)),
        Geometry::Polygon(p) => tagged("POLYGON", wkt_rings(p)),
        Geometry::MultiPoint(mp) => tagged(
            "MULTIPOINT",
            join(mp.0.iter().map(|p| wkt_coord(&p.0))),
        ),
        Geometry::MultiLineString(mls) => tagged(
            "MULTILINESTRING",
            join(mls.0.iter().map(|ls| format!("({})", wkt_coords(ls)))),
        ),
        Geometry::MultiPolygon(mp) => tagged(
            "MULTIPOLYGON",
            join(mp.0.iter().map(|p| format!("({})", wkt_rings(p)))),
        ),
        Geometry::GeometryCollection(gc) => {
            tagged("GEOMETRYCOLLECTION", join(gc.0.iter().map(to_wkt)))
        }
        Geometry::Rect(r) => to_wkt(&Geometry::Polygon(r.to_polygon())),
        Geometry::Triangle(t) => to_wkt(&Geometry::Polygon(t.to_polygon())),
    }
}

fn tagged(tag: &str, body: String) -> String {
    if body.is_empty() {
        format!("{tag} EMPTY")
    } else {
        format!("{tag}({body})")
    }
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(",")
}

fn wkt_coord(c: &Coord<f64>) -> String {
    format!("{} {}", format_float(c.x), format_float(c.y))
}

fn wkt_coords(ls: &LineString<f64>) -> String {
    join(ls.0.iter().map(wkt_coord))
}

fn wkt_rings(p: &Polygon<f64>) -> String {
    join(
        std::iter::once(p.exterior())
            .chain(p.interiors())
            .map(|ring| format!("({})", wkt_coords(ring))),
    )
}

// ---------------------------------------------------------------------------
// WKB / EWKB
// ---------------------------------------------------------------------------

const EWKB_Z: u32 = 0x8000_0000;
const EWKB_M: u32 = 0x4000_0000;
const EWKB_SRID: u32 = 0x2000_0000;
const MAX_WKB_DEPTH: usize = 64;

/// Decode well-known binary. PostGIS extended WKB (SRID and Z/M flags) is
/// accepted; extra dimensions are dropped.
pub fn read_wkb(bytes: &[u8]) -> Result<Geometry<f64>, ParseError> {
    let mut reader = WkbReader { bytes, pos: 0 };
    let geometry = reader.geometry(0)?;
    if reader.pos != bytes.len() {
        tracing::debug!(
            "ignoring {} trailing bytes after WKB geometry",
            bytes.len() - reader.pos
        );
    }
    Ok(geometry)
}

struct WkbReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl WkbReader<'_> {
    fn take<const N: usize>(&mut self) -> Result<[u8; N], ParseError> {
        let end = self.pos + N;
        let slice = self
            .bytes
            .get(self.pos..end)
            .ok_or_else(|| ParseError::InvalidWkb(format!("truncated at byte {}", self.pos)))?;
        self.pos = end;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    fn u32(&mut self, little: bool) -> Result<u32, ParseError> {
        let raw = self.take::<4>()?;
        Ok(if little {
            u32::from_le_bytes(raw)
        } else {
            u32::from_be_bytes(raw)
        })
    }

    fn f64(&mut self, little: bool) -> Result<f64, ParseError> {
        let raw = self.take::<8>()?;
        Ok(if little {
            f64::from_le_bytes(raw)
        } else {
            f64::from_be_bytes(raw)
        })
    }

    fn coord(&mut self, little: bool, dims: usize) -> Result<Coord<f64>, ParseError> {
        let x = self.f64(little)?;
        let y = self.f64(little)?;
        for _ in 2..dims {
            self.f64(little)?;
        }
        Ok(Coord { x, y })
    }

    fn line_string(&mut self, little: bool, dims: usize) -> Result<LineString<f64>, ParseError> {
        let count = self.u32(little)?;
        let coords = (0..count)
            .map(|_| self.coord(little, dims))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LineString::new(coords))
    }

    fn polygon(&mut self, little: bool, dims: usize) -> Result<Polygon<f64>, ParseError> {
        let count = self.u32(little)?;
        let mut rings = (0..count)
            .map(|_| self.line_string(little, dims))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();
        let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
        Ok(Polygon::new(exterior, rings.collect()))
    }

    fn members(
        &mut self,
        little: bool,
        depth: usize,
    ) -> Result<Vec<Geometry<f64>>, ParseError> {
        let count = self.u32(little)?;
        (0..count).map(|_| self.geometry(depth + 1)).collect()
    }

    fn geometry(&mut self, depth: usize) -> Result<Geometry<f64>, ParseError> {
        if depth > MAX_WKB_DEPTH {
            return Err(ParseError::InvalidWkb("nesting too deep".to_string()));
        }
        let little = match self.take::<1>()?[0] {
            0 => false,
            1 => true,
            other => return Err(ParseError::InvalidWkb(format!("bad byte order {other}"))),
        };
        let raw_type = self.u32(little)?;
        if raw_type & EWKB_SRID != 0 {
            self.u32(little)?;
        }
        let mut dims = 2;
        if raw_type & EWKB_Z != 0 {
            dims += 1;
        }
        if raw_type & EWKB_M != 0 {
            dims += 1;
        }
        // ISO WKB encodes dimensions in the thousands digit.
        let base = raw_type & 0x0FFF_FFFF;
        dims += match base / 1000 {
            1 | 2 => 1,
            3 => 2,
            _ => 0,
        };

        let geometry = match base % 1000 {
            1 => Geometry::Point(Point::from(self.coord(little, dims)?)),
            2 => Geometry::LineString(self.line_string(little, dims)?),
            3 => Geometry::Polygon(self.polygon(little, dims)?),
            4 => Geometry::MultiPoint(MultiPoint::new(
                self.members(little, depth)?
                    .into_iter()
                    .map(|g| match g {
                        Geometry::Point(p) => Ok(p),
                        _ => Err(ParseError::InvalidWkb("MULTIPOINT member".to_string())),
                    })
                    .collect::<Result<_, _>>()?,
            )),
            5 => Geometry::MultiLineString(MultiLineString::new(
                self.members(little, depth)?
                    .into_iter()
                    .map(|g| match g {
                        Geometry::LineString(ls) => Ok(ls),
                        _ => Err(ParseError::InvalidWkb("MULTILINESTRING member".to_string())),
                    })
                    .collect::<Result<_, _>>()?,
            )),
            6 => Geometry::MultiPolygon(MultiPolygon::new(
                self.members(little, depth)?
                    .into_iter()
                    .map(|g| match g {
                        Geometry::Polygon(p) => Ok(p),
                        _ => Err(ParseError::InvalidWkb("MULTIPOLYGON member".to_string())),
                    })
                    .collect::<Result<_, _>>()?,
            )),
            7 => Geometry::GeometryCollection(GeometryCollection::new_from(
                self.members(little, depth)?,
            )),
            other => {
                return Err(ParseError::InvalidWkb(format!(
                    "unknown geometry type {other}"
                )))
            }
        };
        Ok(geometry)
    }
}
