use anyhow::{bail, Context, Result};
use convexo::geom2::shapes::regular_polygon;
use convexo::{Poly2, Vec2};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One named polygon as it appears in the input document.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PolygonSpec {
    pub name: String,
    pub vertices: Vec<[f64; 2]>,
    #[serde(default)]
    pub style: Option<String>,
}

/// Input document: `{"polygons": [...]}`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Scene {
    pub polygons: Vec<PolygonSpec>,
}

/// A validated polygon, style carried as an optional label.
pub type Named = (String, Poly2<Option<String>>);

impl Scene {
    /// Read from `path`, or stdin when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let raw = match path {
            Some(p) => std::fs::read_to_string(p)
                .with_context(|| format!("reading scene {}", p.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading scene from stdin")?;
                buf
            }
        };
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("parsing scene JSON")
    }

    /// Validate every polygon; names must be unique and coordinates finite.
    pub fn polygons(&self) -> Result<Vec<Named>> {
        let mut out: Vec<Named> = Vec::with_capacity(self.polygons.len());
        for spec in &self.polygons {
            if out.iter().any(|(n, _)| n == &spec.name) {
                bail!("duplicate polygon name {:?}", spec.name);
            }
            let poly = Poly2::from_coords(&spec.vertices)
                .with_context(|| format!("polygon {:?}", spec.name))?
                .restyle(spec.style.clone());
            if poly.is_degenerate() {
                tracing::warn!(name = %spec.name, vertices = poly.len(), "degenerate polygon");
            }
            out.push((spec.name.clone(), poly));
        }
        Ok(out)
    }

    /// Fixed demo layout: three convex shapes against a square.
    pub fn demo() -> Self {
        let offset = Vec2::new(150.0, 150.0);
        let pentagon = Poly2::from_coords(&[
            [100.0, 100.0],
            [300.0, 100.0],
            [300.0, 300.0],
            [200.0, 400.0],
            [100.0, 300.0],
        ])
        .map(|p| p.translated(offset))
        .unwrap_or_default();
        let hexagon = regular_polygon(6, 150.0).translated(offset);
        let circle_ish = regular_polygon(36, 100.0).translated(Vec2::new(500.0, 100.0));
        let square = vec![
            [200.0, 200.0],
            [400.0, 200.0],
            [400.0, 400.0],
            [200.0, 400.0],
        ];
        let spec = |name: &str, p: &Poly2, style: &str| PolygonSpec {
            name: name.to_string(),
            vertices: p.vs.iter().map(|v| [v.x, v.y]).collect(),
            style: Some(style.to_string()),
        };
        Scene {
            polygons: vec![
                spec("pentagon", &pentagon, "#00ff00"),
                spec("hexagon", &hexagon, "#008000"),
                spec("polygon36", &circle_ish, "#008080"),
                PolygonSpec {
                    name: "square".to_string(),
                    vertices: square,
                    style: Some("#000080".to_string()),
                },
            ],
        }
    }
}

/// Look a polygon up by name.
pub fn find<'a>(polys: &'a [Named], name: &str) -> Result<&'a Poly2<Option<String>>> {
    match polys.iter().find(|(n, _)| n == name) {
        Some((_, p)) => Ok(p),
        None => bail!("no polygon named {name:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_and_validate() {
        let raw = r#"{"polygons": [
            {"name": "a", "vertices": [[0,0],[10,0],[10,10],[0,10]], "style": "green"},
            {"name": "b", "vertices": [[5,5],[15,5],[15,15]]}
        ]}"#;
        let scene = Scene::parse(raw).unwrap();
        let polys = scene.polygons().unwrap();
        assert_eq!(polys.len(), 2);
        assert_eq!(polys[0].1.style.as_deref(), Some("green"));
        assert_eq!(polys[1].1.style, None);
        assert_eq!(find(&polys, "b").unwrap().len(), 3);
        assert!(find(&polys, "c").is_err());
    }

    #[test]
    fn duplicate_names_rejected() {
        let raw = r#"{"polygons": [
            {"name": "a", "vertices": [[0,0],[1,0],[0,1]]},
            {"name": "a", "vertices": [[0,0],[2,0],[0,2]]}
        ]}"#;
        let err = Scene::parse(raw).unwrap().polygons().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Scene::parse("{\"polygons\": [{\"name\": 1}]}").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        let raw = serde_json::to_string(&Scene::demo()).unwrap();
        f.write_all(raw.as_bytes()).unwrap();
        let scene = Scene::load(Some(f.path())).unwrap();
        assert_eq!(scene.polygons.len(), 4);
        assert!(Scene::load(Some(Path::new("/definitely/not/here.json"))).is_err());
    }

    #[test]
    fn demo_shapes_are_convex() {
        let polys = Scene::demo().polygons().unwrap();
        for (name, p) in &polys {
            assert!(p.is_convex(), "{name} should be convex");
        }
        let pentagon = find(&polys, "pentagon").unwrap();
        assert_eq!(pentagon.vs[0], Vec2::new(250.0, 250.0));
    }
}
