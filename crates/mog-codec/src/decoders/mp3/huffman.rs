//! MP3 Huffman 解码器
//!
//! 码表以二叉树形式逐位解码. 解码树在首次使用时由 `tables` 中的
//! `(码字, 码长)` 构建并全局共享.

use std::io::Read;
use std::sync::OnceLock;

use mog_core::{BitReader, MogError, MogResult};

use super::tables::{LINBITS, pair_codes, quad_codes};

/// 解码树节点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Empty,
    Leaf(u8),
    /// 子节点对在 `children` 中的下标
    Branch(u16),
}

/// 二叉解码树, `children[0]` 为根节点的两个分支
#[derive(Debug, Clone)]
struct DecodeTree {
    children: Vec<[Node; 2]>,
}

impl DecodeTree {
    /// 由按符号排列的 `(码字, 码长)` 构建解码树
    fn build(codes: &[(u32, u8)]) -> Self {
        let mut children = vec![[Node::Empty; 2]];
        for (symbol, &(code, len)) in codes.iter().enumerate() {
            let mut idx = 0usize;
            for shift in (1..u32::from(len)).rev() {
                let bit = ((code >> shift) & 1) as usize;
                idx = match children[idx][bit] {
                    Node::Branch(next) => usize::from(next),
                    _ => {
                        children.push([Node::Empty; 2]);
                        let next = children.len() - 1;
                        children[idx][bit] = Node::Branch(next as u16);
                        next
                    }
                };
            }
            children[idx][(code & 1) as usize] = Node::Leaf(symbol as u8);
        }
        Self { children }
    }

    /// 逐位读取直到到达叶子节点
    fn decode<R: Read>(&self, br: &mut BitReader<R>) -> MogResult<u8> {
        let mut idx = 0usize;
        loop {
            let bit = br.read_bits(1) as usize;
            match self.children[idx][bit] {
                Node::Leaf(symbol) => {
                    br.status()?;
                    return Ok(symbol);
                }
                Node::Branch(next) => idx = usize::from(next),
                Node::Empty => {
                    br.status()?;
                    return Err(MogError::InvalidData("无效的 Huffman 码字".into()));
                }
            }
        }
    }
}

/// 成对码表 (下标为 table_select) 与两张四元组码表
struct Codebooks {
    pairs: Vec<Option<(DecodeTree, usize)>>,
    quads: [DecodeTree; 2],
}

static CODEBOOKS: OnceLock<Codebooks> = OnceLock::new();

fn codebooks() -> &'static Codebooks {
    CODEBOOKS.get_or_init(|| {
        let pairs = (0..32u8)
            .map(|table| {
                pair_codes(table).map(|codes| {
                    let dim = match codes.len() {
                        4 => 2,
                        9 => 3,
                        16 => 4,
                        36 => 6,
                        64 => 8,
                        _ => 16,
                    };
                    (DecodeTree::build(codes), dim)
                })
            })
            .collect();
        Codebooks {
            pairs,
            quads: [
                DecodeTree::build(quad_codes(false)),
                DecodeTree::build(quad_codes(true)),
            ],
        }
    })
}

/// 解码 big_values 区的一对数值 (x, y)
///
/// 幅值等于 15 时 (码表 16-31) 读取 linbits 位并直接相加, 非零幅值随后读取 1 位符号.
/// 码表 0/4/14 不消耗任何位, 返回 (0, 0).
pub fn decode_pair<R: Read>(br: &mut BitReader<R>, table_select: u8) -> MogResult<(i32, i32)> {
    let table = usize::from(table_select & 0x1F);
    let Some((tree, dim)) = &codebooks().pairs[table] else {
        return Ok((0, 0));
    };

    let symbol = usize::from(tree.decode(br)?);
    let linbits = LINBITS[table];
    let x = read_magnitude(br, (symbol / dim) as u32, linbits);
    let y = read_magnitude(br, (symbol % dim) as u32, linbits);
    br.status()?;
    Ok((x, y))
}

/// 解码 count1 区的四元组 (v, w, x, y), 每个值属于 {-1, 0, 1}
pub fn decode_quad<R: Read>(br: &mut BitReader<R>, table_b: bool) -> MogResult<[i32; 4]> {
    let tree = &codebooks().quads[usize::from(table_b)];
    let symbol = u32::from(tree.decode(br)?);

    let mut values = [0i32; 4];
    for (i, value) in values.iter_mut().enumerate() {
        *value = read_magnitude(br, (symbol >> (3 - i)) & 1, 0);
    }
    br.status()?;
    Ok(values)
}

fn read_magnitude<R: Read>(br: &mut BitReader<R>, raw: u32, linbits: u32) -> i32 {
    let mut value = raw;
    if value == 15 && linbits > 0 {
        value += br.read_bits(linbits) as u32;
    }
    if value != 0 && br.read_flag() {
        -(value as i32)
    } else {
        value as i32
    }
}
