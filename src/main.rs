use sphere_rings::anim::Animation;
use sphere_rings::desc::{SceneDesc, load_scene_json, parse_scene_json};
use tracing_subscriber::EnvFilter;

const DEFAULT_SCENE_JSON: &str = r#"
    {
        "width": 512,
        "height": 512,
        "n_frames": 400,
        "field_of_view": 0.7853981633974483,
        "near_radius": 0.03,
        "thickness": 0.3,
        "sphere_radius": 3.0,
        "camera_offset": [0.0, 0.0, -10.0],
        "foreground": [0, 0, 0],
        "background": [255, 255, 255],
        "aa_samples": 4,
        "out_dir": ".",
        "format": "png"
    }
"#;

fn load_desc() -> sphere_rings::Result<SceneDesc> {
    // A single optional argument names a scene description file.
    match std::env::args_os().nth(1) {
        Some(path) => {
            let desc = load_scene_json(&path)?;
            tracing::info!(path = %path.to_string_lossy(), "loaded scene description");
            Ok(desc)
        }
        None => parse_scene_json(DEFAULT_SCENE_JSON),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sphere_rings=info")),
        )
        .init();

    let result = load_desc().and_then(Animation::new).and_then(|anim| anim.run());
    match result {
        Ok(summary) => {
            tracing::info!(
                frames = summary.frames,
                drawn = summary.points_drawn,
                skipped = summary.points_skipped,
                "finished"
            );
        }
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}
