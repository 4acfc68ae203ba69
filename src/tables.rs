//! Lookup tables for the hex and base64 alphabets.
//! Decode tables map all 256 byte values; bytes outside the alphabet map to
//! [`INVALID_VALUE`].

/// Marker in the decode tables for a byte that is not part of the alphabet.
pub const INVALID_VALUE: u8 = 255;

/// Lowercase hex alphabet, indexed by nibble value.
pub const HEX_ENCODE: &[u8; 16] = &[
    0x30, // value 0 => '0'
    0x31, // value 1 => '1'
    0x32, // value 2 => '2'
    0x33, // value 3 => '3'
    0x34, // value 4 => '4'
    0x35, // value 5 => '5'
    0x36, // value 6 => '6'
    0x37, // value 7 => '7'
    0x38, // value 8 => '8'
    0x39, // value 9 => '9'
    0x61, // value 10 => 'a'
    0x62, // value 11 => 'b'
    0x63, // value 12 => 'c'
    0x64, // value 13 => 'd'
    0x65, // value 14 => 'e'
    0x66, // value 15 => 'f'
];

/// Case-insensitive hex decode table.
pub const HEX_DECODE: &[u8; 256] = &[
    INVALID_VALUE, // input 0 (0x00)
    INVALID_VALUE, // input 1 (0x01)
    INVALID_VALUE, // input 2 (0x02)
    INVALID_VALUE, // input 3 (0x03)
    INVALID_VALUE, // input 4 (0x04)
    INVALID_VALUE, // input 5 (0x05)
    INVALID_VALUE, // input 6 (0x06)
    INVALID_VALUE, // input 7 (0x07)
    INVALID_VALUE, // input 8 (0x08)
    INVALID_VALUE, // input 9 (0x09)
    INVALID_VALUE, // input 10 (0x0A)
    INVALID_VALUE, // input 11 (0x0B)
    INVALID_VALUE, // input 12 (0x0C)
    INVALID_VALUE, // input 13 (0x0D)
    INVALID_VALUE, // input 14 (0x0E)
    INVALID_VALUE, // input 15 (0x0F)
    INVALID_VALUE, // input 16 (0x10)
    INVALID_VALUE, // input 17 (0x11)
    INVALID_VALUE, // input 18 (0x12)
    INVALID_VALUE, // input 19 (0x13)
    INVALID_VALUE, // input 20 (0x14)
    INVALID_VALUE, // input 21 (0x15)
    INVALID_VALUE, // input 22 (0x16)
    INVALID_VALUE, // input 23 (0x17)
    INVALID_VALUE, // input 24 (0x18)
    INVALID_VALUE, // input 25 (0x19)
    INVALID_VALUE, // input 26 (0x1A)
    INVALID_VALUE, // input 27 (0x1B)
    INVALID_VALUE, // input 28 (0x1C)
    INVALID_VALUE, // input 29 (0x1D)
    INVALID_VALUE, // input 30 (0x1E)
    INVALID_VALUE, // input 31 (0x1F)
    INVALID_VALUE, // input 32 (0x20)
    INVALID_VALUE, // input 33 (0x21)
    INVALID_VALUE, // input 34 (0x22)
    INVALID_VALUE, // input 35 (0x23)
    INVALID_VALUE, // input 36 (0x24)
    INVALID_VALUE, // input 37 (0x25)
    INVALID_VALUE, // input 38 (0x26)
    INVALID_VALUE, // input 39 (0x27)
    INVALID_VALUE, // input 40 (0x28)
    INVALID_VALUE, // input 41 (0x29)
    INVALID_VALUE, // input 42 (0x2A)
    INVALID_VALUE, // input 43 (0x2B)
    INVALID_VALUE, // input 44 (0x2C)
    INVALID_VALUE, // input 45 (0x2D)
    INVALID_VALUE, // input 46 (0x2E)
    INVALID_VALUE, // input 47 (0x2F)
    0, // input 48 (0x30) => 0 ('0')
    1, // input 49 (0x31) => 1 ('1')
    2, // input 50 (0x32) => 2 ('2')
    3, // input 51 (0x33) => 3 ('3')
    4, // input 52 (0x34) => 4 ('4')
    5, // input 53 (0x35) => 5 ('5')
    6, // input 54 (0x36) => 6 ('6')
    7, // input 55 (0x37) => 7 ('7')
    8, // input 56 (0x38) => 8 ('8')
    9, // input 57 (0x39) => 9 ('9')
    INVALID_VALUE, // input 58 (0x3A)
    INVALID_VALUE, // input 59 (0x3B)
    INVALID_VALUE, // input 60 (0x3C)
    INVALID_VALUE, // input 61 (0x3D)
    INVALID_VALUE, // input 62 (0x3E)
    INVALID_VALUE, // input 63 (0x3F)
    INVALID_VALUE, // input 64 (0x40)
    10, // input 65 (0x41) => 10 ('A')
    11, // input 66 (0x42) => 11 ('B')
    12, // input 67 (0x43) => 12 ('C')
    13, // input 68 (0x44) => 13 ('D')
    14, // input 69 (0x45) => 14 ('E')
    15, // input 70 (0x46) => 15 ('F')
    INVALID_VALUE, // input 71 (0x47)
    INVALID_VALUE, // input 72 (0x48)
    INVALID_VALUE, // input 73 (0x49)
    INVALID_VALUE, // input 74 (0x4A)
    INVALID_VALUE, // input 75 (0x4B)
    INVALID_VALUE, // input 76 (0x4C)
    INVALID_VALUE, // input 77 (0x4D)
    INVALID_VALUE, // input 78 (0x4E)
    INVALID_VALUE, // input 79 (0x4F)
    INVALID_VALUE, // input 80 (0x50)
    INVALID_VALUE, // input 81 (0x51)
    INVALID_VALUE, // input 82 (0x52)
    INVALID_VALUE, // input 83 (0x53)
    INVALID_VALUE, // input 84 (0x54)
    INVALID_VALUE, // input 85 (0x55)
    INVALID_VALUE, // input 86 (0x56)
    INVALID_VALUE, // input 87 (0x57)
    INVALID_VALUE, // input 88 (0x58)
    INVALID_VALUE, // input 89 (0x59)
    INVALID_VALUE, // input 90 (0x5A)
    INVALID_VALUE, // input 91 (0x5B)
    INVALID_VALUE, // input 92 (0x5C)
    INVALID_VALUE, // input 93 (0x5D)
    INVALID_VALUE, // input 94 (0x5E)
    INVALID_VALUE, // input 95 (0x5F)
    INVALID_VALUE, // input 96 (0x60)
    10, // input 97 (0x61) => 10 ('a')
    11, // input 98 (0x62) => 11 ('b')
    12, // input 99 (0x63) => 12 ('c')
    13, // input 100 (0x64) => 13 ('d')
    14, // input 101 (0x65) => 14 ('e')
    15, // input 102 (0x66) => 15 ('f')
    INVALID_VALUE, // input 103 (0x67)
    INVALID_VALUE, // input 104 (0x68)
    INVALID_VALUE, // input 105 (0x69)
    INVALID_VALUE, // input 106 (0x6A)
    INVALID_VALUE, // input 107 (0x6B)
    INVALID_VALUE, // input 108 (0x6C)
    INVALID_VALUE, // input 109 (0x6D)
    INVALID_VALUE, // input 110 (0x6E)
    INVALID_VALUE, // input 111 (0x6F)
    INVALID_VALUE, // input 112 (0x70)
    INVALID_VALUE, // input 113 (0x71)
    INVALID_VALUE, // input 114 (0x72)
    INVALID_VALUE, // input 115 (0x73)
    INVALID_VALUE, // input 116 (0x74)
    INVALID_VALUE, // input 117 (0x75)
    INVALID_VALUE, // input 118 (0x76)
    INVALID_VALUE, // input 119 (0x77)
    INVALID_VALUE, // input 120 (0x78)
    INVALID_VALUE, // input 121 (0x79)
    INVALID_VALUE, // input 122 (0x7A)
    INVALID_VALUE, // input 123 (0x7B)
    INVALID_VALUE, // input 124 (0x7C)
    INVALID_VALUE, // input 125 (0x7D)
    INVALID_VALUE, // input 126 (0x7E)
    INVALID_VALUE, // input 127 (0x7F)
    INVALID_VALUE, // input 128 (0x80)
    INVALID_VALUE, // input 129 (0x81)
    INVALID_VALUE, // input 130 (0x82)
    INVALID_VALUE, // input 131 (0x83)
    INVALID_VALUE, // input 132 (0x84)
    INVALID_VALUE, // input 133 (0x85)
    INVALID_VALUE, // input 134 (0x86)
    INVALID_VALUE, // input 135 (0x87)
    INVALID_VALUE, // input 136 (0x88)
    INVALID_VALUE, // input 137 (0x89)
    INVALID_VALUE, // input 138 (0x8A)
    INVALID_VALUE, // input 139 (0x8B)
    INVALID_VALUE, // input 140 (0x8C)
    INVALID_VALUE, // input 141 (0x8D)
    INVALID_VALUE, // input 142 (0x8E)
    INVALID_VALUE, // input 143 (0x8F)
    INVALID_VALUE, // input 144 (0x90)
    INVALID_VALUE, // input 145 (0x91)
    INVALID_VALUE, // input 146 (0x92)
    INVALID_VALUE, // input 147 (0x93)
    INVALID_VALUE, // input 148 (0x94)
    INVALID_VALUE, // input 149 (0x95)
    INVALID_VALUE, // input 150 (0x96)
    INVALID_VALUE, // input 151 (0x97)
    INVALID_VALUE, // input 152 (0x98)
    INVALID_VALUE, // input 153 (0x99)
    INVALID_VALUE, // input 154 (0x9A)
    INVALID_VALUE, // input 155 (0x9B)
    INVALID_VALUE, // input 156 (0x9C)
    INVALID_VALUE, // input 157 (0x9D)
    INVALID_VALUE, // input 158 (0x9E)
    INVALID_VALUE, // input 159 (0x9F)
    INVALID_VALUE, // input 160 (0xA0)
    INVALID_VALUE, // input 161 (0xA1)
    INVALID_VALUE, // input 162 (0xA2)
    INVALID_VALUE, // input 163 (0xA3)
    INVALID_VALUE, // input 164 (0xA4)
    INVALID_VALUE, // input 165 (0xA5)
    INVALID_VALUE, // input 166 (0xA6)
    INVALID_VALUE, // input 167 (0xA7)
    INVALID_VALUE, // input 168 (0xA8)
    INVALID_VALUE, // input 169 (0xA9)
    INVALID_VALUE, // input 170 (0xAA)
    INVALID_VALUE, // input 171 (0xAB)
    INVALID_VALUE, // input 172 (0xAC)
    INVALID_VALUE, // input 173 (0xAD)
    INVALID_VALUE, // input 174 (0xAE)
    INVALID_VALUE, // input 175 (0xAF)
    INVALID_VALUE, // input 176 (0xB0)
    INVALID_VALUE, // input 177 (0xB1)
    INVALID_VALUE, // input 178 (0xB2)
    INVALID_VALUE, // input 179 (0xB3)
    INVALID_VALUE, // input 180 (0xB4)
    INVALID_VALUE, // input 181 (0xB5)
    INVALID_VALUE, // input 182 (0xB6)
    INVALID_VALUE, // input 183 (0xB7)
    INVALID_VALUE, // input 184 (0xB8)
    INVALID_VALUE, // input 185 (0xB9)
    INVALID_VALUE, // input 186 (0xBA)
    INVALID_VALUE, // input 187 (0xBB)
    INVALID_VALUE, // input 188 (0xBC)
    INVALID_VALUE, // input 189 (0xBD)
    INVALID_VALUE, // input 190 (0xBE)
    INVALID_VALUE, // input 191 (0xBF)
    INVALID_VALUE, // input 192 (0xC0)
    INVALID_VALUE, // input 193 (0xC1)
    INVALID_VALUE, // input 194 (0xC2)
    INVALID_VALUE, // input 195 (0xC3)
    INVALID_VALUE, // input 196 (0xC4)
    INVALID_VALUE, // input 197 (0xC5)
    INVALID_VALUE, // input 198 (0xC6)
    INVALID_VALUE, // input 199 (0xC7)
    INVALID_VALUE, // input 200 (0xC8)
    INVALID_VALUE, // input 201 (0xC9)
    INVALID_VALUE, // input 202 (0xCA)
    INVALID_VALUE, // input 203 (0xCB)
    INVALID_VALUE, // input 204 (0xCC)
    INVALID_VALUE, // input 205 (0xCD)
    INVALID_VALUE, // input 206 (0xCE)
    INVALID_VALUE, // input 207 (0xCF)
    INVALID_VALUE, // input 208 (0xD0)
    INVALID_VALUE, // input 209 (0xD1)
    INVALID_VALUE, // input 210 (0xD2)
    INVALID_VALUE, // input 211 (0xD3)
    INVALID_VALUE, // input 212 (0xD4)
    INVALID_VALUE, // input 213 (0xD5)
    INVALID_VALUE, // input 214 (0xD6)
    INVALID_VALUE, // input 215 (0xD7)
    INVALID_VALUE, // input 216 (0xD8)
    INVALID_VALUE, // input 217 (0xD9)
    INVALID_VALUE, // input 218 (0xDA)
    INVALID_VALUE, // input 219 (0xDB)
    INVALID_VALUE, // input 220 (0xDC)
    INVALID_VALUE, // input 221 (0xDD)
    INVALID_VALUE, // input 222 (0xDE)
    INVALID_VALUE, // input 223 (0xDF)
    INVALID_VALUE, // input 224 (0xE0)
    INVALID_VALUE, // input 225 (0xE1)
    INVALID_VALUE, // input 226 (0xE2)
    INVALID_VALUE, // input 227 (0xE3)
    INVALID_VALUE, // input 228 (0xE4)
    INVALID_VALUE, // input 229 (0xE5)
    INVALID_VALUE, // input 230 (0xE6)
    INVALID_VALUE, // input 231 (0xE7)
    INVALID_VALUE, // input 232 (0xE8)
    INVALID_VALUE, // input 233 (0xE9)
    INVALID_VALUE, // input 234 (0xEA)
    INVALID_VALUE, // input 235 (0xEB)
    INVALID_VALUE, // input 236 (0xEC)
    INVALID_VALUE, // input 237 (0xED)
    INVALID_VALUE, // input 238 (0xEE)
    INVALID_VALUE, // input 239 (0xEF)
    INVALID_VALUE, // input 240 (0xF0)
    INVALID_VALUE, // input 241 (0xF1)
    INVALID_VALUE, // input 242 (0xF2)
    INVALID_VALUE, // input 243 (0xF3)
    INVALID_VALUE, // input 244 (0xF4)
    INVALID_VALUE, // input 245 (0xF5)
    INVALID_VALUE, // input 246 (0xF6)
    INVALID_VALUE, // input 247 (0xF7)
    INVALID_VALUE, // input 248 (0xF8)
    INVALID_VALUE, // input 249 (0xF9)
    INVALID_VALUE, // input 250 (0xFA)
    INVALID_VALUE, // input 251 (0xFB)
    INVALID_VALUE, // input 252 (0xFC)
    INVALID_VALUE, // input 253 (0xFD)
    INVALID_VALUE, // input 254 (0xFE)
    INVALID_VALUE, // input 255 (0xFF)
];

/// Standard base64 alphabet, indexed by 6-bit value.
pub const B64_ENCODE: &[u8; 64] = &[
    0x41, // value 0 => 'A'
    0x42, // value 1 => 'B'
    0x43, // value 2 => 'C'
    0x44, // value 3 => 'D'
    0x45, // value 4 => 'E'
    0x46, // value 5 => 'F'
    0x47, // value 6 => 'G'
    0x48, // value 7 => 'H'
    0x49, // value 8 => 'I'
    0x4A, // value 9 => 'J'
    0x4B, // value 10 => 'K'
    0x4C, // value 11 => 'L'
    0x4D, // value 12 => 'M'
    0x4E, // value 13 => 'N'
    0x4F, // value 14 => 'O'
    0x50, // value 15 => 'P'
    0x51, // value 16 => 'Q'
    0x52, // value 17 => 'R'
    0x53, // value 18 => 'S'
    0x54, // value 19 => 'T'
    0x55, // value 20 => 'U'
    0x56, // value 21 => 'V'
    0x57, // value 22 => 'W'
    0x58, // value 23 => 'X'
    0x59, // value 24 => 'Y'
    0x5A, // value 25 => 'Z'
    0x61, // value 26 => 'a'
    0x62, // value 27 => 'b'
    0x63, // value 28 => 'c'
    0x64, // value 29 => 'd'
    0x65, // value 30 => 'e'
    0x66, // value 31 => 'f'
    0x67, // value 32 => 'g'
    0x68, // value 33 => 'h'
    0x69, // value 34 => 'i'
    0x6A, // value 35 => 'j'
    0x6B, // value 36 => 'k'
    0x6C, // value 37 => 'l'
    0x6D, // value 38 => 'm'
    0x6E, // value 39 => 'n'
    0x6F, // value 40 => 'o'
    0x70, // value 41 => 'p'
    0x71, // value 42 => 'q'
    0x72, // value 43 => 'r'
    0x73, // value 44 => 's'
    0x74, // value 45 => 't'
    0x75, // value 46 => 'u'
    0x76, // value 47 => 'v'
    0x77, // value 48 => 'w'
    0x78, // value 49 => 'x'
    0x79, // value 50 => 'y'
    0x7A, // value 51 => 'z'
    0x30, // value 52 => '0'
    0x31, // value 53 => '1'
    0x32, // value 54 => '2'
    0x33, // value 55 => '3'
    0x34, // value 56 => '4'
    0x35, // value 57 => '5'
    0x36, // value 58 => '6'
    0x37, // value 59 => '7'
    0x38, // value 60 => '8'
    0x39, // value 61 => '9'
    0x2B, // value 62 => '+'
    0x2F, // value 63 => '/'
];

/// Standard base64 decode table. `=` is handled separately by the codec and
/// deliberately maps to [`INVALID_VALUE`] here.
pub const B64_DECODE: &[u8; 256] = &[
    INVALID_VALUE, // input 0 (0x00)
    INVALID_VALUE, // input 1 (0x01)
    INVALID_VALUE, // input 2 (0x02)
    INVALID_VALUE, // input 3 (0x03)
    INVALID_VALUE, // input 4 (0x04)
    INVALID_VALUE, // input 5 (0x05)
    INVALID_VALUE, // input 6 (0x06)
    INVALID_VALUE, // input 7 (0x07)
    INVALID_VALUE, // input 8 (0x08)
    INVALID_VALUE, // input 9 (0x09)
    INVALID_VALUE, // input 10 (0x0A)
    INVALID_VALUE, // input 11 (0x0B)
    INVALID_VALUE, // input 12 (0x0C)
    INVALID_VALUE, // input 13 (0x0D)
    INVALID_VALUE, // input 14 (0x0E)
    INVALID_VALUE, // input 15 (0x0F)
    INVALID_VALUE, // input 16 (0x10)
    INVALID_VALUE, // input 17 (0x11)
    INVALID_VALUE, // input 18 (0x12)
    INVALID_VALUE, // input 19 (0x13)
    INVALID_VALUE, // input 20 (0x14)
    INVALID_VALUE, // input 21 (0x15)
    INVALID_VALUE, // input 22 (0x16)
    INVALID_VALUE, // input 23 (0x17)
    INVALID_VALUE, // input 24 (0x18)
    INVALID_VALUE, // input 25 (0x19)
    INVALID_VALUE, // input 26 (0x1A)
    INVALID_VALUE, // input 27 (0x1B)
    INVALID_VALUE, // input 28 (0x1C)
    INVALID_VALUE, // input 29 (0x1D)
    INVALID_VALUE, // input 30 (0x1E)
    INVALID_VALUE, // input 31 (0x1F)
    INVALID_VALUE, // input 32 (0x20)
    INVALID_VALUE, // input 33 (0x21)
    INVALID_VALUE, // input 34 (0x22)
    INVALID_VALUE, // input 35 (0x23)
    INVALID_VALUE, // input 36 (0x24)
    INVALID_VALUE, // input 37 (0x25)
    INVALID_VALUE, // input 38 (0x26)
    INVALID_VALUE, // input 39 (0x27)
    INVALID_VALUE, // input 40 (0x28)
    INVALID_VALUE, // input 41 (0x29)
    INVALID_VALUE, // input 42 (0x2A)
    62, // input 43 (0x2B) => 62 ('+')
    INVALID_VALUE, // input 44 (0x2C)
    INVALID_VALUE, // input 45 (0x2D)
    INVALID_VALUE, // input 46 (0x2E)
    63, // input 47 (0x2F) => 63 ('/')
    52, // input 48 (0x30) => 52 ('0')
    53, // input 49 (0x31) => 53 ('1')
    54, // input 50 (0x32) => 54 ('2')
    55, // input 51 (0x33) => 55 ('3')
    56, // input 52 (0x34) => 56 ('4')
    57, // input 53 (0x35) => 57 ('5')
    58, // input 54 (0x36) => 58 ('6')
    59, // input 55 (0x37) => 59 ('7')
    60, // input 56 (0x38) => 60 ('8')
    61, // input 57 (0x39) => 61 ('9')
    INVALID_VALUE, // input 58 (0x3A)
    INVALID_VALUE, // input 59 (0x3B)
    INVALID_VALUE, // input 60 (0x3C)
    INVALID_VALUE, // input 61 (0x3D)
    INVALID_VALUE, // input 62 (0x3E)
    INVALID_VALUE, // input 63 (0x3F)
    INVALID_VALUE, // input 64 (0x40)
    0, // input 65 (0x41) => 0 ('A')
    1, // input 66 (0x42) => 1 ('B')
    2, // input 67 (0x43) => 2 ('C')
    3, // input 68 (0x44) => 3 ('D')
    4, // input 69 (0x45) => 4 ('E')
    5, // input 70 (0x46) => 5 ('F')
    6, // input 71 (0x47) => 6 ('G')
    7, // input 72 (0x48) => 7 ('H')
    8, // input 73 (0x49) => 8 ('I')
    9, // input 74 (0x4A) => 9 ('J')
    10, // input 75 (0x4B) => 10 ('K')
    11, // input 76 (0x4C) => 11 ('L')
    12, // input 77 (0x4D) => 12 ('M')
    13, // input 78 (0x4E) => 13 ('N')
    14, // input 79 (0x4F) => 14 ('O')
    15, // input 80 (0x50) => 15 ('P')
    16, // input 81 (0x51) => 16 ('Q')
    17, // input 82 (0x52) => 17 ('R')
    18, // input 83 (0x53) => 18 ('S')
    19, // input 84 (0x54) => 19 ('T')
    20, // input 85 (0x55) => 20 ('U')
    21, // input 86 (0x56) => 21 ('V')
    22, // input 87 (0x57) => 22 ('W')
    23, // input 88 (0x58) => 23 ('X')
    24, // input 89 (0x59) => 24 ('Y')
    25, // input 90 (0x5A) => 25 ('Z')
    INVALID_VALUE, // input 91 (0x5B)
    INVALID_VALUE, // input 92 (0x5C)
    INVALID_VALUE, // input 93 (0x5D)
    INVALID_VALUE, // input 94 (0x5E)
    INVALID_VALUE, // input 95 (0x5F)
    INVALID_VALUE, // input 96 (0x60)
    26, // input 97 (0x61) => 26 ('a')
    27, // input 98 (0x62) => 27 ('b')
    28, // input 99 (0x63) => 28 ('c')
    29, // input 100 (0x64) => 29 ('d')
    30, // input 101 (0x65) => 30 ('e')
    31, // input 102 (0x66) => 31 ('f')
    32, // input 103 (0x67) => 32 ('g')
    33, // input 104 (0x68) => 33 ('h')
    34, // input 105 (0x69) => 34 ('i')
    35, // input 106 (0x6A) => 35 ('j')
    36, // input 107 (0x6B) => 36 ('k')
    37, // input 108 (0x6C) => 37 ('l')
    38, // input 109 (0x6D) => 38 ('m')
    39, // input 110 (0x6E) => 39 ('n')
    40, // input 111 (0x6F) => 40 ('o')
    41, // input 112 (0x70) => 41 ('p')
    42, // input 113 (0x71) => 42 ('q')
    43, // input 114 (0x72) => 43 ('r')
    44, // input 115 (0x73) => 44 ('s')
    45, // input 116 (0x74) => 45 ('t')
    46, // input 117 (0x75) => 46 ('u')
    47, // input 118 (0x76) => 47 ('v')
    48, // input 119 (0x77) => 48 ('w')
    49, // input 120 (0x78) => 49 ('x')
    50, // input 121 (0x79) => 50 ('y')
    51, // input 122 (0x7A) => 51 ('z')
    INVALID_VALUE, // input 123 (0x7B)
    INVALID_VALUE, // input 124 (0x7C)
    INVALID_VALUE, // input 125 (0x7D)
    INVALID_VALUE, // input 126 (0x7E)
    INVALID_VALUE, // input 127 (0x7F)
    INVALID_VALUE, // input 128 (0x80)
    INVALID_VALUE, // input 129 (0x81)
    INVALID_VALUE, // input 130 (0x82)
    INVALID_VALUE, // input 131 (0x83)
    INVALID_VALUE, // input 132 (0x84)
    INVALID_VALUE, // input 133 (0x85)
    INVALID_VALUE, // input 134 (0x86)
    INVALID_VALUE, // input 135 (0x87)
    INVALID_VALUE, // input 136 (0x88)
    INVALID_VALUE, // input 137 (0x89)
    INVALID_VALUE, // input 138 (0x8A)
    INVALID_VALUE, // input 139 (0x8B)
    INVALID_VALUE, // input 140 (0x8C)
    INVALID_VALUE, // input 141 (0x8D)
    INVALID_VALUE, // input 142 (0x8E)
    INVALID_VALUE, // input 143 (0x8F)
    INVALID_VALUE, // input 144 (0x90)
    INVALID_VALUE, // input 145 (0x91)
    INVALID_VALUE, // input 146 (0x92)
    INVALID_VALUE, // input 147 (0x93)
    INVALID_VALUE, // input 148 (0x94)
    INVALID_VALUE, // input 149 (0x95)
    INVALID_VALUE, // input 150 (0x96)
    INVALID_VALUE, // input 151 (0x97)
    INVALID_VALUE, // input 152 (0x98)
    INVALID_VALUE, // input 153 (0x99)
    INVALID_VALUE, // input 154 (0x9A)
    INVALID_VALUE, // input 155 (0x9B)
    INVALID_VALUE, // input 156 (0x9C)
    INVALID_VALUE, // input 157 (0x9D)
    INVALID_VALUE, // input 158 (0x9E)
    INVALID_VALUE, // input 159 (0x9F)
    INVALID_VALUE, // input 160 (0xA0)
    INVALID_VALUE, // input 161 (0xA1)
    INVALID_VALUE, // input 162 (0xA2)
    INVALID_VALUE, // input 163 (0xA3)
    INVALID_VALUE, // input 164 (0xA4)
    INVALID_VALUE, // input 165 (0xA5)
    INVALID_VALUE, // input 166 (0xA6)
    INVALID_VALUE, // input 167 (0xA7)
    INVALID_VALUE, // input 168 (0xA8)
    INVALID_VALUE, // input 169 (0xA9)
    INVALID_VALUE, // input 170 (0xAA)
    INVALID_VALUE, // input 171 (0xAB)
    INVALID_VALUE, // input 172 (0xAC)
    INVALID_VALUE, // input 173 (0xAD)
    INVALID_VALUE, // input 174 (0xAE)
    INVALID_VALUE, // input 175 (0xAF)
    INVALID_VALUE, // input 176 (0xB0)
    INVALID_VALUE, // input 177 (0xB1)
    INVALID_VALUE, // input 178 (0xB2)
    INVALID_VALUE, // input 179 (0xB3)
    INVALID_VALUE, // input 180 (0xB4)
    INVALID_VALUE, // input 181 (0xB5)
    INVALID_VALUE, // input 182 (0xB6)
    INVALID_VALUE, // input 183 (0xB7)
    INVALID_VALUE, // input 184 (0xB8)
    INVALID_VALUE, // input 185 (0xB9)
    INVALID_VALUE, // input 186 (0xBA)
    INVALID_VALUE, // input 187 (0xBB)
    INVALID_VALUE, // input 188 (0xBC)
    INVALID_VALUE, // input 189 (0xBD)
    INVALID_VALUE, // input 190 (0xBE)
    INVALID_VALUE, // input 191 (0xBF)
    INVALID_VALUE, // input 192 (0xC0)
    INVALID_VALUE, // input 193 (0xC1)
    INVALID_VALUE, // input 194 (0xC2)
    INVALID_VALUE, // input 195 (0xC3)
    INVALID_VALUE, // input 196 (0xC4)
    INVALID_VALUE, // input 197 (0xC5)
    INVALID_VALUE, // input 198 (0xC6)
    INVALID_VALUE, // input 199 (0xC7)
    INVALID_VALUE, // input 200 (0xC8)
    INVALID_VALUE, // input 201 (0xC9)
    INVALID_VALUE, // input 202 (0xCA)
    INVALID_VALUE, // input 203 (0xCB)
    INVALID_VALUE, // input 204 (0xCC)
    INVALID_VALUE, // input 205 (0xCD)
    INVALID_VALUE, // input 206 (0xCE)
    INVALID_VALUE, // input 207 (0xCF)
    INVALID_VALUE, // input 208 (0xD0)
    INVALID_VALUE, // input 209 (0xD1)
    INVALID_VALUE, // input 210 (0xD2)
    INVALID_VALUE, // input 211 (0xD3)
    INVALID_VALUE, // input 212 (0xD4)
    INVALID_VALUE, // input 213 (0xD5)
    INVALID_VALUE, // input 214 (0xD6)
    INVALID_VALUE, // input 215 (0xD7)
    INVALID_VALUE, // input 216 (0xD8)
    INVALID_VALUE, // input 217 (0xD9)
    INVALID_VALUE, // input 218 (0xDA)
    INVALID_VALUE, // input 219 (0xDB)
    INVALID_VALUE, // input 220 (0xDC)
    INVALID_VALUE, // input 221 (0xDD)
    INVALID_VALUE, // input 222 (0xDE)
    INVALID_VALUE, // input 223 (0xDF)
    INVALID_VALUE, // input 224 (0xE0)
    INVALID_VALUE, // input 225 (0xE1)
    INVALID_VALUE, // input 226 (0xE2)
    INVALID_VALUE, // input 227 (0xE3)
    INVALID_VALUE, // input 228 (0xE4)
    INVALID_VALUE, // input 229 (0xE5)
    INVALID_VALUE, // input 230 (0xE6)
    INVALID_VALUE, // input 231 (0xE7)
    INVALID_VALUE, // input 232 (0xE8)
    INVALID_VALUE, // input 233 (0xE9)
    INVALID_VALUE, // input 234 (0xEA)
    INVALID_VALUE, // input 235 (0xEB)
    INVALID_VALUE, // input 236 (0xEC)
    INVALID_VALUE, // input 237 (0xED)
    INVALID_VALUE, // input 238 (0xEE)
    INVALID_VALUE, // input 239 (0xEF)
    INVALID_VALUE, // input 240 (0xF0)
    INVALID_VALUE, // input 241 (0xF1)
    INVALID_VALUE, // input 242 (0xF2)
    INVALID_VALUE, // input 243 (0xF3)
    INVALID_VALUE, // input 244 (0xF4)
    INVALID_VALUE, // input 245 (0xF5)
    INVALID_VALUE, // input 246 (0xF6)
    INVALID_VALUE, // input 247 (0xF7)
    INVALID_VALUE, // input 248 (0xF8)
    INVALID_VALUE, // input 249 (0xF9)
    INVALID_VALUE, // input 250 (0xFA)
    INVALID_VALUE, // input 251 (0xFB)
    INVALID_VALUE, // input 252 (0xFC)
    INVALID_VALUE, // input 253 (0xFD)
    INVALID_VALUE, // input 254 (0xFE)
    INVALID_VALUE, // input 255 (0xFF)
];
