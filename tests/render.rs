use image::Rgb;
use tempfile::tempdir;

use spheretrace::camera::DEFAULT_FOV;
use spheretrace::light::Light;
use spheretrace::output::write_ppm;
use spheretrace::ray::Ray;
use spheretrace::sphere::Sphere;
use spheretrace::vector::{Color, Vec3};
use spheretrace::{trace, Camera, Framebuffer, Material, PartialConfig, RenderConfig, Scene, ShadingOptions};

fn reference_camera() -> Camera {
    Camera::new(200, 200, DEFAULT_FOV)
}

fn pixel(image: &Framebuffer, x: u32, y: u32) -> Color {
    let Rgb([r, g, b]) = *image.get_pixel(x, y);
    Color::new(r, g, b)
}

fn bits(image: &Framebuffer) -> Vec<u32> {
    image.as_raw().iter().map(|c| c.to_bits()).collect()
}

#[test]
fn test_render_is_deterministic() {
    let scene = Scene::reference();
    let camera = reference_camera();

    for options in [ShadingOptions::default(), ShadingOptions::reference()] {
        let first = camera.render(&scene, &options);
        let second = camera.render(&scene, &options);
        assert_eq!(bits(&first), bits(&second));
    }
}

#[test]
fn test_foreground_sphere_is_directly_lit() {
    let scene = Scene::reference();
    let image = reference_camera().render(&scene, &ShadingOptions::reference());

    // Pixel whose ray passes through the center of the sphere at (2, -2.5, -25).
    let color = pixel(&image, 129, 137);

    assert_ne!(color, scene.background);
    assert_ne!(color, Color::ZERO);
    // Warm sphere color (1.0, 0.75, 0.45) scaled by a single cosine term.
    assert!(color.x > color.y && color.y > color.z && color.z > 0.0);
    assert!(color.x <= 1.0);
}

#[test]
fn test_ray_at_sphere_center_matches_sphere_hue() {
    let scene = Scene::reference();
    let target = scene.spheres[1].center;
    let ray = Ray::new(Vec3::ZERO, target.normalize());

    let color = trace(&ray, &scene, &ShadingOptions::default(), 0);
    let ratio = color / scene.spheres[1].color;

    // One white light, unshadowed: every channel scaled by the same cosine.
    assert!(ratio.x > 0.0);
    assert!((ratio.x - ratio.y).abs() < 1e-5);
    assert!((ratio.x - ratio.z).abs() < 1e-5);
}

#[test]
fn test_image_center_passes_over_the_floor() {
    // The view axis runs just above the huge floor sphere's horizon, so the
    // center pixel sees the background.
    let scene = Scene::reference();
    let image = reference_camera().render(&scene, &ShadingOptions::reference());
    assert_eq!(pixel(&image, 100, 100), scene.background);
}

#[test]
fn test_floor_is_visible_at_the_bottom() {
    let scene = Scene::reference();
    let ray = reference_camera().get_ray(100, 199);

    assert!(spheretrace::hittable::nearest_hit(&ray, &scene.spheres)
        .is_some_and(|(sphere, _)| std::ptr::eq(sphere, &scene.spheres[0])));
}

#[test]
fn test_blocked_light_leaves_surface_black() {
    let lit = Scene::new(
        vec![Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, Color::ONE, Material::Diffuse)],
        vec![Light::new(Vec3::new(0.0, 20.0, -8.0), Color::ONE, 1.0)],
        Color::new(0.0, 0.0, 0.5),
    );
    let mut blocked = lit.clone();
    // Sits on the line from the top of the sphere to the light, out of the
    // camera's view.
    blocked.spheres.push(Sphere::new(
        Vec3::new(0.0, 10.0, -9.0),
        2.0,
        Color::ONE,
        Material::Diffuse,
    ));

    // Aim at the upper part of the sphere, which faces the light.
    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.5, -10.0).normalize());
    let options = ShadingOptions::default();

    let lit_color = trace(&ray, &lit, &options, 0);
    assert!(lit_color.x > 0.0);
    assert_eq!(trace(&ray, &blocked, &options, 0), Color::ZERO);
}

#[test]
fn test_empty_scene_serializes_as_black_ppm() {
    let scene = Scene::default();
    let image = Camera::new(5, 3, DEFAULT_FOV).render(&scene, &ShadingOptions::default());

    let mut bytes = Vec::new();
    write_ppm(&image, &mut bytes).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    let body = text.strip_prefix("P3\n5 3\n255\n").unwrap();
    assert_eq!(body, format!("{}\n", "0 0 0 ".repeat(15)));
}

#[test]
fn test_configured_render_from_scene_file() {
    let dir = tempdir().unwrap();
    let scene_path = dir.path().join("scene.toml");
    std::fs::write(
        &scene_path,
        r#"
background = [0.0, 1.0, 0.0]

[[spheres]]
center = [0.0, 0.0, -10.0]
radius = 1.0
color = [1.0, 1.0, 1.0]
material = "specular"
"#,
    )
    .unwrap();
    let config_path = dir.path().join("render.toml");
    std::fs::write(&config_path, "width = 9\nheight = 9\nscene = \"scene.toml\"\noutput = \"out.ppm\"\n").unwrap();

    let mut config = RenderConfig::default();
    config.merge(PartialConfig::from_file(&config_path).unwrap());
    config.merge(PartialConfig {
        output: Some(dir.path().join("out.ppm")),
        ..PartialConfig::default()
    });
    config.validate().unwrap();

    let scene = config.load_scene().unwrap();
    let image = config.camera().render(&scene, &config.shading_options());
    spheretrace::output::save_image(&image, &config.output).unwrap();

    // Specular sphere in the middle renders black, the corners show the
    // green background.
    assert_eq!(pixel(&image, 4, 4), Color::ZERO);
    assert_eq!(pixel(&image, 0, 0), Color::new(0.0, 1.0, 0.0));

    let text = std::fs::read_to_string(dir.path().join("out.ppm")).unwrap();
    assert!(text.starts_with("P3\n9 9\n255\n0 255 0 "));
}
