// ABOUTME: PPTX generation module for the text-slides application
// ABOUTME: Writes one text slide per segment into a PowerPoint package

use crate::errors::{Result, SlidesError};
use crate::pptx_parts;
use crate::utils;
use log::{info, warn};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Seek, Write};
use std::path::Path;
use zip::{write::FileOptions, ZipWriter};

/// File name used when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "Presentation.pptx";

/// EMUs per inch
const EMU_PER_INCH: u64 = 914400;

/// Configuration for PPTX generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub title: String,
    pub aspect_ratio: String, // "16:9" or "4:3"
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: "Text Presentation".to_string(),
            aspect_ratio: "16:9".to_string(),
        }
    }
}

impl ExportConfig {
    /// Slide width and height in EMUs for the configured aspect ratio
    pub fn slide_size(&self) -> (u64, u64) {
        match self.aspect_ratio.as_str() {
            "16:9" => (9144000, 5143500), // 10in x 5.625in
            "4:3" => (9144000, 6858000),  // 10in x 7.5in
            _ => {
                warn!(
                    "Unsupported aspect ratio: {}. Using 16:9 instead.",
                    self.aspect_ratio
                );
                (9144000, 5143500)
            }
        }
    }
}

/// Generate a PPTX presentation with one slide per entry of `slides`.
///
/// An empty slide list is rejected before anything is written.
pub fn generate_pptx(slides: &[String], output_file: &Path, config: &ExportConfig) -> Result<()> {
    if slides.is_empty() {
        return Err(SlidesError::EmptyPresentation);
    }

    info!(
        "Generating PPTX with {} slides at {:?}",
        slides.len(),
        output_file
    );

    utils::ensure_parent_directory_exists(output_file)?;

    let file = fs::File::create(output_file).map_err(SlidesError::FileReadError)?;
    write_pptx(file, slides, config)?;

    info!("PPTX file created at {:?}", output_file);
    Ok(())
}

/// Write the presentation package into any seekable writer
pub fn write_pptx<W: Write + Seek>(writer: W, slides: &[String], config: &ExportConfig) -> Result<W> {
    if slides.is_empty() {
        return Err(SlidesError::EmptyPresentation);
    }

    let (cx, cy) = config.slide_size();
    let mut zip = ZipWriter::new(writer);

    write_part(&mut zip, "[Content_Types].xml", &content_types_xml(slides.len()))?;
    write_part(&mut zip, "_rels/.rels", pptx_parts::ROOT_RELS)?;
    write_part(&mut zip, "docProps/app.xml", &app_xml(slides.len()))?;
    write_part(&mut zip, "docProps/core.xml", &core_xml(&config.title))?;
    write_part(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels_xml(slides.len()),
    )?;
    write_part(
        &mut zip,
        "ppt/presentation.xml",
        &presentation_xml(slides.len(), cx, cy),
    )?;

    write_part(&mut zip, "ppt/theme/theme1.xml", pptx_parts::THEME)?;
    write_part(&mut zip, "ppt/slideMasters/slideMaster1.xml", pptx_parts::SLIDE_MASTER)?;
    write_part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        pptx_parts::SLIDE_MASTER_RELS,
    )?;
    write_part(&mut zip, "ppt/slideLayouts/slideLayout1.xml", pptx_parts::SLIDE_LAYOUT)?;
    write_part(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        pptx_parts::SLIDE_LAYOUT_RELS,
    )?;

    for (i, slide) in slides.iter().enumerate() {
        let slide_num = i + 1;
        write_part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
            pptx_parts::SLIDE_RELS,
        )?;
        write_part(
            &mut zip,
            &format!("ppt/slides/slide{}.xml", slide_num),
            &slide_xml(slide_num, slide, cx, cy),
        )?;
    }

    info!("Finalizing PPTX file");
    Ok(zip.finish()?)
}

fn write_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, content: &str) -> Result<()> {
    info!("Creating PPTX part: {}", name);
    zip.start_file(name, FileOptions::default())?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn content_types_xml(slide_count: usize) -> String {
    let slides = (1..=slide_count)
        .map(|n| {
            format!(
                r#"    <Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                n
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
{slides}
</Types>"#,
        slides = slides
    )
}

fn app_xml(slide_count: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>text-slides</Application>
    <PresentationFormat>On-screen Show</PresentationFormat>
    <Slides>{}</Slides>
</Properties>"#,
        slide_count
    )
}

fn core_xml(title: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>text-slides</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        escape(&xml_text(title)),
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    )
}

// rId1 is the slide master, rId2 the theme; slides follow from rId3
fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="theme/theme1.xml"/>
"#,
    );

    for n in 1..=slide_count {
        rels.push_str(&format!(
            r#"    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            n + 2,
            n
        ));
        rels.push('\n');
    }

    rels.push_str("</Relationships>");
    rels
}

fn presentation_xml(slide_count: usize, cx: u64, cy: u64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">
    <p:sldMasterIdLst>
        <p:sldMasterId id="2147483648" r:id="rId1"/>
    </p:sldMasterIdLst>
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        slide_ids = (1..=slide_count)
            .map(|n| format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 255 + n, n + 2))
            .collect::<Vec<String>>()
            .join("\n"),
        cx = cx,
        cy = cy
    )
}

/// Build one slide: a small ordinal label in the top-left corner and the
/// slide text centred in the body area.
fn slide_xml(slide_num: usize, text: &str, cx: u64, cy: u64) -> String {
    let margin = EMU_PER_INCH / 2;
    let label = text_shape(
        2,
        "Slide Number Label",
        (margin, EMU_PER_INCH / 10),
        (cx - 2 * margin, EMU_PER_INCH * 4 / 10),
        &TextStyle {
            size: 1200,
            color: "999999",
            align: "l",
            anchor: "t",
            inset: 91440,
        },
        &format!("Slide {}", slide_num),
    );
    let body = text_shape(
        3,
        "Slide Text",
        (margin, margin),
        (cx * 9 / 10, cy * 7 / 10),
        &TextStyle {
            size: 2400,
            color: "000000",
            align: "ctr",
            anchor: "ctr",
            inset: margin,
        },
        text,
    );

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld>
        <p:spTree>
            <p:nvGrpSpPr>
                <p:cNvPr id="1" name=""/>
                <p:cNvGrpSpPr/>
                <p:nvPr/>
            </p:nvGrpSpPr>
            <p:grpSpPr>
                <a:xfrm>
                    <a:off x="0" y="0"/>
                    <a:ext cx="0" cy="0"/>
                    <a:chOff x="0" y="0"/>
                    <a:chExt cx="0" cy="0"/>
                </a:xfrm>
            </p:grpSpPr>
{label}
{body}
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr>
        <a:masterClrMapping/>
    </p:clrMapOvr>
</p:sld>"#,
        label = label,
        body = body
    )
}

struct TextStyle<'a> {
    /// Hundredths of a point
    size: u32,
    color: &'a str,
    align: &'a str,
    anchor: &'a str,
    inset: u64,
}

fn text_shape(
    id: u32,
    name: &str,
    (x, y): (u64, u64),
    (width, height): (u64, u64),
    style: &TextStyle,
    text: &str,
) -> String {
    let paragraphs = text
        .lines()
        .map(|line| paragraph_xml(line, style))
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        r#"            <p:sp>
                <p:nvSpPr>
                    <p:cNvPr id="{id}" name="{name}"/>
                    <p:cNvSpPr txBox="1"/>
                    <p:nvPr/>
                </p:nvSpPr>
                <p:spPr>
                    <a:xfrm>
                        <a:off x="{x}" y="{y}"/>
                        <a:ext cx="{width}" cy="{height}"/>
                    </a:xfrm>
                    <a:prstGeom prst="rect">
                        <a:avLst/>
                    </a:prstGeom>
                    <a:noFill/>
                </p:spPr>
                <p:txBody>
                    <a:bodyPr wrap="square" lIns="{inset}" tIns="{inset}" rIns="{inset}" bIns="{inset}" anchor="{anchor}" rtlCol="0">
                        <a:noAutofit/>
                    </a:bodyPr>
                    <a:lstStyle/>
{paragraphs}
                </p:txBody>
            </p:sp>"#,
        id = id,
        name = name,
        x = x,
        y = y,
        width = width,
        height = height,
        inset = style.inset,
        anchor = style.anchor,
        paragraphs = paragraphs
    )
}

fn paragraph_xml(line: &str, style: &TextStyle) -> String {
    if line.trim().is_empty() {
        return format!(
            r#"                    <a:p><a:pPr algn="{}"/><a:endParaRPr lang="en-US" sz="{}" dirty="0"/></a:p>"#,
            style.align, style.size
        );
    }

    format!(
        r#"                    <a:p><a:pPr algn="{align}"/><a:r><a:rPr lang="en-US" sz="{size}" dirty="0"><a:solidFill><a:srgbClr val="{color}"/></a:solidFill></a:rPr><a:t>{text}</a:t></a:r></a:p>"#,
        align = style.align,
        size = style.size,
        color = style.color,
        text = escape(&xml_text(line))
    )
}

/// Drop characters XML 1.0 cannot carry: C0 controls other than tab and
/// line breaks, and the noncharacters U+FFFE and U+FFFF.
fn xml_text(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            matches!(c, '\t' | '\n' | '\r')
                || (c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}')
        })
        .collect()
}
