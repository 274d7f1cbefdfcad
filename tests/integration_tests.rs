use anyhow::Ok;
use image::{ImageBuffer, Rgba, RgbImage};
use lsb_stash::{
    cli::{ExtractArgs, HideFileArgs, HideTextArgs},
    handler::{handle_extract, handle_hide_file, handle_hide_text},
    steganography::{PayloadKind, embed},
};
use rand::RngCore;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// 一个辅助函数，用于创建一个带有随机像素的测试图像
fn create_test_image(path: &Path, width: u32, height: u32) {
    let mut img_buf = ImageBuffer::new(width, height);
    let mut raw_pixels = vec![0u8; (width * height * 4) as usize];
    rand::rng().fill_bytes(&mut raw_pixels);

    img_buf
        .pixels_mut()
        .zip(raw_pixels.chunks_exact(4))
        .for_each(|(pixel, chunk)| {
            *pixel = Rgba([chunk[0], chunk[1], chunk[2], 255]);
        });

    img_buf.save(path).expect("Failed to create test image.");
}

/// 验证从隐藏文本到提取的完整流程
#[test]
fn test_hide_text_and_extract_integration() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.png");
    let hidden_image_path = dir.path().join("hidden.png");
    let recovered_text_path = dir.path().join("recovered.txt");

    create_test_image(&original_image_path, 100, 100);
    let original_text = "This is a test message for the handler! 这是一个给处理器的测试信息！";

    // 2. 测试 handle_hide_text
    let hide_args = HideTextArgs {
        image: original_image_path.clone(),
        message: original_text.to_string(),
        dest: hidden_image_path.clone(),
        method: 0,
        force: false,
    };
    handle_hide_text(hide_args)?;
    assert!(
        hidden_image_path.exists(),
        "Hidden image should be created."
    );

    // 3. 测试 handle_extract
    let extract_args = ExtractArgs {
        image: hidden_image_path.clone(),
        out: Some(recovered_text_path.clone()),
        force: false,
    };
    handle_extract(extract_args)?;
    assert!(
        recovered_text_path.exists(),
        "Recovered text file should be created."
    );

    // 4. 验证结果
    let recovered_text = fs::read_to_string(&recovered_text_path)?;
    assert_eq!(
        original_text, recovered_text,
        "Recovered text must match the original."
    );

    Ok(())
}

/// 验证从隐藏文件到提取的完整流程，覆盖全部四种嵌入方法
#[test]
fn test_hide_file_and_extract_all_methods() -> anyhow::Result<()> {
    for method in 0..=3u8 {
        // 1. 准备环境
        let dir = tempdir()?;
        let original_image_path = dir.path().join("original.png");
        let hidden_image_path = dir.path().join("hidden.png");
        let payload_path = dir.path().join("secret.bin");
        let recovered_path = dir.path().join("recovered.bin");

        // 200x200 的边框在保留头部后仍有 593 个可用位，足以容纳 64 字节负载帧
        create_test_image(&original_image_path, 200, 200);
        let mut payload = vec![0u8; 64];
        rand::rng().fill_bytes(&mut payload);
        fs::write(&payload_path, &payload)?;

        // 2. 测试 handle_hide_file
        let hide_args = HideFileArgs {
            image: original_image_path.clone(),
            file: payload_path.clone(),
            dest: hidden_image_path.clone(),
            method,
            force: false,
        };
        handle_hide_file(hide_args)?;

        // 3. 测试 handle_extract
        let extract_args = ExtractArgs {
            image: hidden_image_path.clone(),
            out: Some(recovered_path.clone()),
            force: false,
        };
        handle_extract(extract_args)?;

        // 4. 验证结果
        let recovered = fs::read(&recovered_path)?;
        assert_eq!(
            payload, recovered,
            "Recovered file must match the original for method {}.",
            method
        );
    }

    Ok(())
}

/// 验证当用户不提供输出路径时，文件提取的默认路径选择
///
/// 头部中恢复出文件名时写入该文件名；文件名为空时回退到 `output.bin`。
/// 默认路径是相对于当前工作目录解析的，因此测试先切换到临时目录。
#[test]
fn test_extract_file_with_default_output_paths() -> anyhow::Result<()> {
    // 1. 准备环境，并把工作目录切换到临时目录
    let dir = tempdir()?;
    let previous_dir = std::env::current_dir()?;
    std::env::set_current_dir(dir.path())?;

    // 负载源放在子目录里，避免提取的默认输出与它同名相撞
    let inputs_dir = dir.path().join("inputs");
    fs::create_dir(&inputs_dir)?;
    let original_image_path = inputs_dir.join("original.png");
    let payload_path = inputs_dir.join("secret.bin");
    let hidden_with_name = inputs_dir.join("hidden_with_name.png");
    let hidden_without_name = inputs_dir.join("hidden_without_name.png");

    create_test_image(&original_image_path, 100, 100);
    let mut payload = vec![0u8; 48];
    rand::rng().fill_bytes(&mut payload);
    fs::write(&payload_path, &payload)?;

    // 2. 场景一：头部记录了文件名，默认输出使用恢复的文件名
    let hide_args = HideFileArgs {
        image: original_image_path.clone(),
        file: payload_path.clone(),
        dest: hidden_with_name.clone(),
        method: 0,
        force: false,
    };
    handle_hide_file(hide_args)?;

    let extract_args = ExtractArgs {
        image: hidden_with_name,
        out: None,
        force: false,
    };
    handle_extract(extract_args)?;

    // 3. 场景二：文件名槽位为空，默认输出回退到 output.bin
    let stego = embed(RgbImage::new(100, 100), &payload, PayloadKind::File, 0, "")
        .expect("Embedding should succeed.");
    stego.save(&hidden_without_name)?;

    let extract_args = ExtractArgs {
        image: hidden_without_name,
        out: None,
        force: false,
    };
    handle_extract(extract_args)?;

    // 4. 恢复工作目录后验证结果
    std::env::set_current_dir(previous_dir)?;

    let recovered_named = fs::read(dir.path().join("secret.bin"))?;
    assert_eq!(
        payload, recovered_named,
        "Default output must use the recovered filename."
    );

    let fallback_path = dir.path().join("output.bin");
    assert!(
        fallback_path.exists(),
        "Default output must fall back to output.bin when no name was recorded."
    );
    let recovered_fallback = fs::read(&fallback_path)?;
    assert_eq!(
        payload, recovered_fallback,
        "Fallback output must contain the hidden payload."
    );

    Ok(())
}

/// 验证覆盖保护机制以及 `--force` 标志是否按预期工作
#[test]
fn test_overwrite_protection_and_force_flag() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("image.png");
    let dest_path = dir.path().join("dest.png");

    create_test_image(&image_path, 50, 50);

    // 2. 场景一：测试覆盖保护
    // 先创建一个同名的目标文件，模拟“文件已存在”的场景
    fs::write(&dest_path, "this is a dummy file to be overwritten")?;
    assert!(dest_path.exists());

    // 构建参数，不使用 --force
    let hide_args_no_force = HideTextArgs {
        image: image_path.clone(),
        message: "some text".to_string(),
        dest: dest_path.clone(),
        method: 0,
        force: false,
    };

    // 执行并断言操作会失败
    let result = handle_hide_text(hide_args_no_force);
    assert!(
        result.is_err(),
        "Execution should fail without --force when file exists."
    );
    if let Err(e) = result {
        assert!(e.to_string().contains("Output file already exists"));
    }

    // 3. 场景二：测试强制覆盖
    // 构建参数，这次使用 --force
    let hide_args_with_force = HideTextArgs {
        image: image_path.clone(),
        message: "some text".to_string(),
        dest: dest_path.clone(),
        method: 0,
        force: true,
    };

    // 执行并断言操作会成功
    let result = handle_hide_text(hide_args_with_force);
    assert!(
        result.is_ok(),
        "Execution should succeed with --force when file exists."
    );

    // 验证文件确实被覆盖（内容不再是 "this is a dummy file..."）
    let dummy_content = fs::read(&dest_path)?;
    assert_ne!(dummy_content, b"this is a dummy file to be overwritten");

    Ok(())
}

/// 验证空间不足时的错误处理
#[test]
fn test_hide_text_not_enough_space() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("small.png");
    let dest_path = dir.path().join("dest.png");

    // 创建一个刚好放得下头部但放不下负载的图片
    create_test_image(&image_path, 25, 25);
    let large_text = "a".repeat(5000);

    // 2. 执行并断言错误
    let hide_args = HideTextArgs {
        image: image_path,
        message: large_text,
        dest: dest_path,
        method: 0,
        force: false,
    };
    let result = handle_hide_text(hide_args);

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(format!("{:#}", e).contains("Insufficient capacity"));
    }

    Ok(())
}

/// 验证图像小到连头部都放不下时的错误处理
#[test]
fn test_hide_text_image_too_small() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("tiny.png");
    let dest_path = dir.path().join("dest.png");

    // 10x10 = 100 像素，小于头部所需的 579 位
    create_test_image(&image_path, 10, 10);

    // 2. 执行并断言错误
    let hide_args = HideTextArgs {
        image: image_path,
        message: "x".to_string(),
        dest: dest_path,
        method: 0,
        force: false,
    };
    let result = handle_hide_text(hide_args);

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(format!("{:#}", e).contains("Image too small"));
    }

    Ok(())
}
