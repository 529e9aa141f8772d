//! The catalog of V4L2 symbols consumed downstream.
//!
//! Request codes are built by the `_IOR`/`_IOW`/`_IOWR` macros from the size
//! of the argument structure, so their values differ between architectures.
//! Format identifiers are fourcc codes and are stable, but are still read from
//! the headers rather than written down here.
//!
//! Entries may be appended as consumers need them. Removing or renaming one
//! breaks every consumer that refers to it.

use crate::catalog::{Catalog, Family, SymbolEntry, WidthClass};

/// Expands grouped `Width NAME` rows into a [`SymbolEntry`] slice.
macro_rules! symbols {
	($($family:ident: [$($width:ident $name:ident),* $(,)?]),* $(,)?) => {
		&[$($(
			SymbolEntry::new(stringify!($name), WidthClass::$width, Family::$family),
		)*)*]
	};
}

/// Headers that define every symbol in [`V4L2`].
pub const HEADERS: &[&str] = &["linux/videodev2.h"];

/// The V4L2 symbol catalog, in emission order.
pub static V4L2: Catalog<'static> = Catalog::new(HEADERS, SYMBOLS);

/// Table backing [`V4L2`].
const SYMBOLS: &[SymbolEntry<'static>] = symbols! {
	Request: [
		Wide64 VIDIOC_QUERYCAP,
		Wide64 VIDIOC_G_FMT,
		Wide64 VIDIOC_S_FMT,
		Wide64 VIDIOC_REQBUFS,
		Wide64 VIDIOC_QBUF,
		Wide64 VIDIOC_DQBUF,
		Wide64 VIDIOC_STREAMON,
	],
	PixelFormat: [
		// RGB, 8 and 16 bpp
		Narrow32 V4L2_PIX_FMT_RGB332,
		Narrow32 V4L2_PIX_FMT_RGB444,
		Narrow32 V4L2_PIX_FMT_ARGB444,
		Narrow32 V4L2_PIX_FMT_XRGB444,
		Narrow32 V4L2_PIX_FMT_RGBA444,
		Narrow32 V4L2_PIX_FMT_RGBX444,
		Narrow32 V4L2_PIX_FMT_ABGR444,
		Narrow32 V4L2_PIX_FMT_XBGR444,
		Narrow32 V4L2_PIX_FMT_BGRA444,
		Narrow32 V4L2_PIX_FMT_BGRX444,
		Narrow32 V4L2_PIX_FMT_RGB555,
		Narrow32 V4L2_PIX_FMT_ARGB555,
		Narrow32 V4L2_PIX_FMT_XRGB555,
		Narrow32 V4L2_PIX_FMT_RGBA555,
		Narrow32 V4L2_PIX_FMT_RGBX555,
		Narrow32 V4L2_PIX_FMT_ABGR555,
		Narrow32 V4L2_PIX_FMT_XBGR555,
		Narrow32 V4L2_PIX_FMT_BGRA555,
		Narrow32 V4L2_PIX_FMT_BGRX555,
		Narrow32 V4L2_PIX_FMT_RGB565,
		Narrow32 V4L2_PIX_FMT_RGB555X,
		Narrow32 V4L2_PIX_FMT_ARGB555X,
		Narrow32 V4L2_PIX_FMT_XRGB555X,
		Narrow32 V4L2_PIX_FMT_RGB565X,

		// RGB, 24 and 32 bpp
		Narrow32 V4L2_PIX_FMT_BGR666,
		Narrow32 V4L2_PIX_FMT_BGR24,
		Narrow32 V4L2_PIX_FMT_RGB24,
		Narrow32 V4L2_PIX_FMT_BGR32,
		Narrow32 V4L2_PIX_FMT_ABGR32,
		Narrow32 V4L2_PIX_FMT_XBGR32,
		Narrow32 V4L2_PIX_FMT_BGRA32,
		Narrow32 V4L2_PIX_FMT_BGRX32,
		Narrow32 V4L2_PIX_FMT_RGB32,
		Narrow32 V4L2_PIX_FMT_RGBA32,
		Narrow32 V4L2_PIX_FMT_RGBX32,
		Narrow32 V4L2_PIX_FMT_ARGB32,
		Narrow32 V4L2_PIX_FMT_XRGB32,
		Narrow32 V4L2_PIX_FMT_RGBX1010102,
		Narrow32 V4L2_PIX_FMT_RGBA1010102,
		Narrow32 V4L2_PIX_FMT_ARGB2101010,

		// RGB, 48 and 64 bpp
		Narrow32 V4L2_PIX_FMT_BGR48_12,
		Narrow32 V4L2_PIX_FMT_ABGR64_12,

		// Greyscale
		Narrow32 V4L2_PIX_FMT_GREY,
		Narrow32 V4L2_PIX_FMT_Y4,
		Narrow32 V4L2_PIX_FMT_Y6,
		Narrow32 V4L2_PIX_FMT_Y10,
		Narrow32 V4L2_PIX_FMT_Y12,
		Narrow32 V4L2_PIX_FMT_Y012,
		Narrow32 V4L2_PIX_FMT_Y14,
		Narrow32 V4L2_PIX_FMT_Y16,
		Narrow32 V4L2_PIX_FMT_Y16_BE,

		// Greyscale, bit-packed
		Narrow32 V4L2_PIX_FMT_Y10BPACK,
		Narrow32 V4L2_PIX_FMT_Y10P,
		Narrow32 V4L2_PIX_FMT_IPU3_Y10,

		// Palette
		Narrow32 V4L2_PIX_FMT_PAL8,

		// Chrominance
		Narrow32 V4L2_PIX_FMT_UV8,

		// Packed YUV
		Narrow32 V4L2_PIX_FMT_YUYV,
		Narrow32 V4L2_PIX_FMT_YYUV,
		Narrow32 V4L2_PIX_FMT_YVYU,
		Narrow32 V4L2_PIX_FMT_UYVY,
		Narrow32 V4L2_PIX_FMT_VYUY,
		Narrow32 V4L2_PIX_FMT_Y41P,
		Narrow32 V4L2_PIX_FMT_YUV444,
		Narrow32 V4L2_PIX_FMT_YUV555,
		Narrow32 V4L2_PIX_FMT_YUV565,
		Narrow32 V4L2_PIX_FMT_YUV24,
		Narrow32 V4L2_PIX_FMT_YUV32,
		Narrow32 V4L2_PIX_FMT_AYUV32,
		Narrow32 V4L2_PIX_FMT_XYUV32,
		Narrow32 V4L2_PIX_FMT_VUYA32,
		Narrow32 V4L2_PIX_FMT_VUYX32,
		Narrow32 V4L2_PIX_FMT_YUVA32,
		Narrow32 V4L2_PIX_FMT_YUVX32,
		Narrow32 V4L2_PIX_FMT_M420,
		Narrow32 V4L2_PIX_FMT_YUV48_12,

		// Packed YCbCr, MSB-aligned samples
		Narrow32 V4L2_PIX_FMT_Y210,
		Narrow32 V4L2_PIX_FMT_Y212,
		Narrow32 V4L2_PIX_FMT_Y216,

		// Semi-planar YUV
		Narrow32 V4L2_PIX_FMT_NV12,
		Narrow32 V4L2_PIX_FMT_NV21,
		Narrow32 V4L2_PIX_FMT_NV16,
		Narrow32 V4L2_PIX_FMT_NV61,
		Narrow32 V4L2_PIX_FMT_NV24,
		Narrow32 V4L2_PIX_FMT_NV42,
		Narrow32 V4L2_PIX_FMT_P010,
		Narrow32 V4L2_PIX_FMT_P012,

		// Semi-planar YUV, non-contiguous planes
		Narrow32 V4L2_PIX_FMT_NV12M,
		Narrow32 V4L2_PIX_FMT_NV21M,
		Narrow32 V4L2_PIX_FMT_NV16M,
		Narrow32 V4L2_PIX_FMT_NV61M,
		Narrow32 V4L2_PIX_FMT_P012M,

		// Planar YUV
		Narrow32 V4L2_PIX_FMT_YUV410,
		Narrow32 V4L2_PIX_FMT_YVU410,
		Narrow32 V4L2_PIX_FMT_YUV411P,
		Narrow32 V4L2_PIX_FMT_YUV420,
		Narrow32 V4L2_PIX_FMT_YVU420,
		Narrow32 V4L2_PIX_FMT_YUV422P,

		// Planar YUV, non-contiguous planes
		Narrow32 V4L2_PIX_FMT_YUV420M,
		Narrow32 V4L2_PIX_FMT_YVU420M,
		Narrow32 V4L2_PIX_FMT_YUV422M,
		Narrow32 V4L2_PIX_FMT_YVU422M,
		Narrow32 V4L2_PIX_FMT_YUV444M,
		Narrow32 V4L2_PIX_FMT_YVU444M,

		// Tiled YUV
		Narrow32 V4L2_PIX_FMT_NV12_4L4,
		Narrow32 V4L2_PIX_FMT_NV12_16L16,
		Narrow32 V4L2_PIX_FMT_NV12_32L32,
		Narrow32 V4L2_PIX_FMT_NV15_4L4,
		Narrow32 V4L2_PIX_FMT_P010_4L4,
		Narrow32 V4L2_PIX_FMT_NV12_8L128,
		Narrow32 V4L2_PIX_FMT_NV12_10BE_8L128,

		// Tiled YUV, non-contiguous planes
		Narrow32 V4L2_PIX_FMT_NV12MT,
		Narrow32 V4L2_PIX_FMT_NV12MT_16X16,
		Narrow32 V4L2_PIX_FMT_NV12M_8L128,
		Narrow32 V4L2_PIX_FMT_NV12M_10BE_8L128,

		// Bayer
		Narrow32 V4L2_PIX_FMT_SBGGR8,
		Narrow32 V4L2_PIX_FMT_SGBRG8,
		Narrow32 V4L2_PIX_FMT_SGRBG8,
		Narrow32 V4L2_PIX_FMT_SRGGB8,
		Narrow32 V4L2_PIX_FMT_SBGGR10,
		Narrow32 V4L2_PIX_FMT_SGBRG10,
		Narrow32 V4L2_PIX_FMT_SGRBG10,
		Narrow32 V4L2_PIX_FMT_SRGGB10,
		Narrow32 V4L2_PIX_FMT_SBGGR10P,
		Narrow32 V4L2_PIX_FMT_SGBRG10P,
		Narrow32 V4L2_PIX_FMT_SGRBG10P,
		Narrow32 V4L2_PIX_FMT_SRGGB10P,
		Narrow32 V4L2_PIX_FMT_SBGGR10ALAW8,
		Narrow32 V4L2_PIX_FMT_SGBRG10ALAW8,
		Narrow32 V4L2_PIX_FMT_SGRBG10ALAW8,
		Narrow32 V4L2_PIX_FMT_SRGGB10ALAW8,
		Narrow32 V4L2_PIX_FMT_SBGGR10DPCM8,
		Narrow32 V4L2_PIX_FMT_SGBRG10DPCM8,
		Narrow32 V4L2_PIX_FMT_SGRBG10DPCM8,
		Narrow32 V4L2_PIX_FMT_SRGGB10DPCM8,
		Narrow32 V4L2_PIX_FMT_SBGGR12,
		Narrow32 V4L2_PIX_FMT_SGBRG12,
		Narrow32 V4L2_PIX_FMT_SGRBG12,
		Narrow32 V4L2_PIX_FMT_SRGGB12,
		Narrow32 V4L2_PIX_FMT_SBGGR12P,
		Narrow32 V4L2_PIX_FMT_SGBRG12P,
		Narrow32 V4L2_PIX_FMT_SGRBG12P,
		Narrow32 V4L2_PIX_FMT_SRGGB12P,
		Narrow32 V4L2_PIX_FMT_SBGGR14,
		Narrow32 V4L2_PIX_FMT_SGBRG14,
		Narrow32 V4L2_PIX_FMT_SGRBG14,
		Narrow32 V4L2_PIX_FMT_SRGGB14,
		Narrow32 V4L2_PIX_FMT_SBGGR14P,
		Narrow32 V4L2_PIX_FMT_SGBRG14P,
		Narrow32 V4L2_PIX_FMT_SGRBG14P,
		Narrow32 V4L2_PIX_FMT_SRGGB14P,
		Narrow32 V4L2_PIX_FMT_SBGGR16,
		Narrow32 V4L2_PIX_FMT_SGBRG16,
		Narrow32 V4L2_PIX_FMT_SGRBG16,
		Narrow32 V4L2_PIX_FMT_SRGGB16,

		// HSV
		Narrow32 V4L2_PIX_FMT_HSV24,
		Narrow32 V4L2_PIX_FMT_HSV32,

		// Compressed
		Narrow32 V4L2_PIX_FMT_MJPEG,
		Narrow32 V4L2_PIX_FMT_JPEG,
		Narrow32 V4L2_PIX_FMT_DV,
		Narrow32 V4L2_PIX_FMT_MPEG,
		Narrow32 V4L2_PIX_FMT_H264,
		Narrow32 V4L2_PIX_FMT_H264_NO_SC,
		Narrow32 V4L2_PIX_FMT_H264_MVC,
		Narrow32 V4L2_PIX_FMT_H263,
		Narrow32 V4L2_PIX_FMT_MPEG1,
		Narrow32 V4L2_PIX_FMT_MPEG2,
		Narrow32 V4L2_PIX_FMT_MPEG2_SLICE,
		Narrow32 V4L2_PIX_FMT_MPEG4,
		Narrow32 V4L2_PIX_FMT_XVID,
		Narrow32 V4L2_PIX_FMT_VC1_ANNEX_G,
		Narrow32 V4L2_PIX_FMT_VC1_ANNEX_L,
		Narrow32 V4L2_PIX_FMT_VP8,
		Narrow32 V4L2_PIX_FMT_VP8_FRAME,
		Narrow32 V4L2_PIX_FMT_VP9,
		Narrow32 V4L2_PIX_FMT_VP9_FRAME,
		Narrow32 V4L2_PIX_FMT_HEVC,
		Narrow32 V4L2_PIX_FMT_FWHT,
		Narrow32 V4L2_PIX_FMT_FWHT_STATELESS,
		Narrow32 V4L2_PIX_FMT_H264_SLICE,
		Narrow32 V4L2_PIX_FMT_HEVC_SLICE,
		Narrow32 V4L2_PIX_FMT_AV1_FRAME,
		Narrow32 V4L2_PIX_FMT_SPK,
		Narrow32 V4L2_PIX_FMT_RV30,
		Narrow32 V4L2_PIX_FMT_RV40,

		// Vendor-specific
		Narrow32 V4L2_PIX_FMT_CPIA1,
		Narrow32 V4L2_PIX_FMT_WNVA,
		Narrow32 V4L2_PIX_FMT_SN9C10X,
		Narrow32 V4L2_PIX_FMT_SN9C20X_I420,
		Narrow32 V4L2_PIX_FMT_PWC1,
		Narrow32 V4L2_PIX_FMT_PWC2,
		Narrow32 V4L2_PIX_FMT_ET61X251,
		Narrow32 V4L2_PIX_FMT_SPCA501,
		Narrow32 V4L2_PIX_FMT_SPCA505,
		Narrow32 V4L2_PIX_FMT_SPCA508,
		Narrow32 V4L2_PIX_FMT_SPCA561,
		Narrow32 V4L2_PIX_FMT_PAC207,
		Narrow32 V4L2_PIX_FMT_MR97310A,
		Narrow32 V4L2_PIX_FMT_JL2005BCD,
		Narrow32 V4L2_PIX_FMT_SN9C2028,
		Narrow32 V4L2_PIX_FMT_SQ905C,
		Narrow32 V4L2_PIX_FMT_PJPG,
		Narrow32 V4L2_PIX_FMT_OV511,
		Narrow32 V4L2_PIX_FMT_OV518,
		Narrow32 V4L2_PIX_FMT_STV0680,
		Narrow32 V4L2_PIX_FMT_TM6000,
		Narrow32 V4L2_PIX_FMT_CIT_YYVYUY,
		Narrow32 V4L2_PIX_FMT_KONICA420,
		Narrow32 V4L2_PIX_FMT_JPGL,
		Narrow32 V4L2_PIX_FMT_SE401,
		Narrow32 V4L2_PIX_FMT_S5C_UYVY_JPG,
		Narrow32 V4L2_PIX_FMT_Y8I,
		Narrow32 V4L2_PIX_FMT_Y12I,
		Narrow32 V4L2_PIX_FMT_Z16,
		Narrow32 V4L2_PIX_FMT_MT21C,
		Narrow32 V4L2_PIX_FMT_MM21,
		Narrow32 V4L2_PIX_FMT_MT2110T,
		Narrow32 V4L2_PIX_FMT_MT2110R,
		Narrow32 V4L2_PIX_FMT_INZI,
		Narrow32 V4L2_PIX_FMT_CNF4,
		Narrow32 V4L2_PIX_FMT_HI240,
		Narrow32 V4L2_PIX_FMT_QC08C,
		Narrow32 V4L2_PIX_FMT_QC10C,
		Narrow32 V4L2_PIX_FMT_AJPG,
		Narrow32 V4L2_PIX_FMT_HEXTILE,
		Narrow32 V4L2_PIX_FMT_IPU3_SBGGR10,
		Narrow32 V4L2_PIX_FMT_IPU3_SGBRG10,
		Narrow32 V4L2_PIX_FMT_IPU3_SGRBG10,
		Narrow32 V4L2_PIX_FMT_IPU3_SRGGB10,
	],
	SdrFormat: [
		Narrow32 V4L2_SDR_FMT_CU8,
		Narrow32 V4L2_SDR_FMT_CU16LE,
		Narrow32 V4L2_SDR_FMT_CS8,
		Narrow32 V4L2_SDR_FMT_CS14LE,
		Narrow32 V4L2_SDR_FMT_RU12LE,
		Narrow32 V4L2_SDR_FMT_PCU16BE,
		Narrow32 V4L2_SDR_FMT_PCU18BE,
		Narrow32 V4L2_SDR_FMT_PCU20BE,
	],
	TouchFormat: [
		Narrow32 V4L2_TCH_FMT_DELTA_TD16,
		Narrow32 V4L2_TCH_FMT_DELTA_TD08,
		Narrow32 V4L2_TCH_FMT_TU16,
		Narrow32 V4L2_TCH_FMT_TU08,
	],
	MetaFormat: [
		Narrow32 V4L2_META_FMT_VSP1_HGO,
		Narrow32 V4L2_META_FMT_VSP1_HGT,
		Narrow32 V4L2_META_FMT_UVC,
		Narrow32 V4L2_META_FMT_D4XX,
		Narrow32 V4L2_META_FMT_VIVID,

		// Rockchip ISP1
		Narrow32 V4L2_META_FMT_RK_ISP1_PARAMS,
		Narrow32 V4L2_META_FMT_RK_ISP1_STAT_3A,
	],
};
