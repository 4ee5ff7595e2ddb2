/*
 * Image list operations. Apart from creation, every call forwards the native
 * success flag or index unchanged; handle validity is left to comctl32.
 * `add_icon` and `remove_all` are the sentinel forms of `replace_icon` and
 * `remove`.
 */
use crate::binding::Comctl32;
use crate::entry_points::{
    IMAGE_LIST_ADD, IMAGE_LIST_CREATE, IMAGE_LIST_DESTROY, IMAGE_LIST_GET_IMAGE_COUNT,
    IMAGE_LIST_REMOVE, IMAGE_LIST_REPLACE_ICON, IMAGE_LIST_SET_IMAGE_COUNT, require,
};
use crate::error::{BindingError, Result as BindingResult};
use crate::types::{
    BitmapHandle, IMAGE_LIST_ALL, IMAGE_LIST_APPEND, IconHandle, ImageListFlags, ImageListHandle,
};

impl Comctl32 {
    /*
     * Creates an image list of `width` x `height` images. A null handle from
     * comctl32 is reported as `ImageListCreationFailed` so no caller can end up
     * holding an unusable handle.
     */
    pub fn image_list_create(
        &self,
        width: i32,
        height: i32,
        flags: ImageListFlags,
        initial_capacity: i32,
        grow_by: i32,
    ) -> BindingResult<ImageListHandle> {
        let create = require(self.entry_points().image_list_create, IMAGE_LIST_CREATE)?;
        let handle = unsafe { create(width, height, flags.bits(), initial_capacity, grow_by) };
        if handle.is_null() {
            log::warn!(
                "ImageList_Create returned NULL for {width}x{height}, flags {:#x}",
                flags.bits()
            );
            return Err(BindingError::ImageListCreationFailed {
                width,
                height,
                flags: flags.bits(),
            });
        }
        log::debug!("Created image list {handle:?} ({width}x{height})");
        Ok(handle)
    }

    pub fn image_list_destroy(&self, image_list: ImageListHandle) -> BindingResult<bool> {
        let destroy = require(self.entry_points().image_list_destroy, IMAGE_LIST_DESTROY)?;
        Ok(unsafe { destroy(image_list) } != 0)
    }

    pub fn image_list_get_image_count(&self, image_list: ImageListHandle) -> BindingResult<i32> {
        let get_count = require(
            self.entry_points().image_list_get_image_count,
            IMAGE_LIST_GET_IMAGE_COUNT,
        )?;
        Ok(unsafe { get_count(image_list) })
    }

    pub fn image_list_set_image_count(
        &self,
        image_list: ImageListHandle,
        new_count: u32,
    ) -> BindingResult<bool> {
        let set_count = require(
            self.entry_points().image_list_set_image_count,
            IMAGE_LIST_SET_IMAGE_COUNT,
        )?;
        Ok(unsafe { set_count(image_list, new_count) } != 0)
    }

    /// Returns the index of the new image, or `IMAGE_LIST_FAILED`.
    pub fn image_list_add(
        &self,
        image_list: ImageListHandle,
        image: BitmapHandle,
        mask: BitmapHandle,
    ) -> BindingResult<i32> {
        let add = require(self.entry_points().image_list_add, IMAGE_LIST_ADD)?;
        Ok(unsafe { add(image_list, image, mask) })
    }

    /// Replaces the image at `index`, or appends when `index` is `IMAGE_LIST_APPEND`.
    pub fn image_list_replace_icon(
        &self,
        image_list: ImageListHandle,
        index: i32,
        icon: IconHandle,
    ) -> BindingResult<i32> {
        let replace_icon = require(
            self.entry_points().image_list_replace_icon,
            IMAGE_LIST_REPLACE_ICON,
        )?;
        Ok(unsafe { replace_icon(image_list, index, icon) })
    }

    pub fn image_list_add_icon(
        &self,
        image_list: ImageListHandle,
        icon: IconHandle,
    ) -> BindingResult<i32> {
        self.image_list_replace_icon(image_list, IMAGE_LIST_APPEND, icon)
    }

    pub fn image_list_remove(&self, image_list: ImageListHandle, index: i32) -> BindingResult<bool> {
        let remove = require(self.entry_points().image_list_remove, IMAGE_LIST_REMOVE)?;
        Ok(unsafe { remove(image_list, index) } != 0)
    }

    pub fn image_list_remove_all(&self, image_list: ImageListHandle) -> BindingResult<bool> {
        self.image_list_remove(image_list, IMAGE_LIST_ALL)
    }
}
