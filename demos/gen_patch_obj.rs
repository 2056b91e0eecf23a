//! Tessellate an arched Bezier patch and print it as Wavefront OBJ.
//!
//! Run with: cargo run --example gen_patch_obj > patch.obj

use nalgebra::{Point2, Point3};
use waffle::prelude::*;

fn main() {
    // An arch over the unit square: the middle control row is lifted, so
    // the surface curves like a vaulted ceiling section.
    let mut controls = [Point3::origin(); 9];
    let mut uvs = [Point2::origin(); 9];
    for k in 0..9 {
        let (u, v) = ((k % 3) as f32 * 0.5, (k / 3) as f32 * 0.5);
        let z = if k / 3 == 1 { 1.0 } else { 0.0 };
        controls[k] = Point3::new(u, v, z);
        uvs[k] = Point2::new(u, v);
    }
    let patch = BezierPatch::new(controls, uvs, uvs);

    let level = 8;
    let mesh = tessellate(&patch, level).expect("Failed to tessellate patch");
    eprintln!(
        "Tessellated at level {}: {} vertices, {} triangles",
        level,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    // Emit OBJ: positions, primary UVs, then faces with 1-based indices.
    println!("o bezier_patch");
    for p in &mesh.positions {
        println!("v {} {} {}", p.x, p.y, p.z);
    }
    for uv in &mesh.uv0 {
        println!("vt {} {}", uv.x, uv.y);
    }
    for [a, b, c] in mesh.triangles() {
        println!("f {0}/{0} {1}/{1} {2}/{2}", a + 1, b + 1, c + 1);
    }

    eprintln!("Done!");
}
